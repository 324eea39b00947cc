//! Case conversion and one-shot replacement.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SEPARATED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-_]+([^\s\-_])").expect("valid camelize pattern"));

static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid decamelize pattern"));

/// Joins words separated by whitespace, `-` or `_` into camel case.
///
/// ```
/// use anim_utils::text::camelize;
///
/// assert_eq!(camelize("transform-origin"), "transformOrigin");
/// assert_eq!(camelize("abcd_efg"), "abcdEfg");
/// assert_eq!(camelize("abcd efg"), "abcdEfg");
/// ```
pub fn camelize(text: &str) -> String {
    SEPARATED_WORD
        .replace_all(text, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Splits camel case with `separator` and lowercases the split letters.
///
/// ```
/// use anim_utils::text::decamelize;
///
/// assert_eq!(decamelize("transformOrigin", "-"), "transform-origin");
/// assert_eq!(decamelize("abcdEfg", "_"), "abcd_efg");
/// ```
pub fn decamelize(text: &str, separator: &str) -> String {
    CASE_BOUNDARY
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], separator, caps[2].to_lowercase())
        })
        .into_owned()
}

/// Replaces the first match of `pattern` in `text` with `replacement`.
///
/// `replacement` is inserted literally; `$` has no special meaning.
pub fn replace_once(text: &str, pattern: &Regex, replacement: &str) -> String {
    pattern
        .replacen(text, 1, regex::NoExpand(replacement))
        .into_owned()
}

/// Replaces the first match of `pattern`, computing the replacement from
/// the match's captures.
pub fn replace_once_with<F>(text: &str, pattern: &Regex, replacement: F) -> String
where
    F: FnMut(&Captures) -> String,
{
    pattern.replacen(text, 1, replacement).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_runs() {
        assert_eq!(camelize("a--b__c  d"), "aBCD");
        assert_eq!(camelize("-webkit-transform"), "WebkitTransform");
        assert_eq!(camelize("trailing-"), "trailing-");
    }

    #[test]
    fn test_decamelize_only_lower_upper() {
        assert_eq!(decamelize("ABC", "-"), "ABC");
        assert_eq!(decamelize("aBcD", "-"), "a-bc-d");
    }

    #[test]
    fn test_replace_once() {
        let digits = Regex::new(r"\d+").unwrap();
        assert_eq!(replace_once("a1b22c3", &digits, "#"), "a#b22c3");
        assert_eq!(replace_once("abc", &digits, "#"), "abc");
        assert_eq!(replace_once("a1", &digits, "$0"), "a$0");
    }

    #[test]
    fn test_replace_once_with() {
        let word = Regex::new(r"(\w)(\w*)").unwrap();
        let replaced = replace_once_with("hello world", &word, |caps| {
            format!("{}{}", caps[1].to_uppercase(), &caps[2])
        });
        assert_eq!(replaced, "Hello world");
    }
}
