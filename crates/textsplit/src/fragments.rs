//! Fragment lexer.
//!
//! Breaks input text into the raw fragments the scanner walks over: the
//! separator together with its surrounding whitespace, every delimiter
//! literal, whitespace runs, and the plain text in between. Concatenating
//! the fragments always gives back the input.

use crate::options::{OpenCloseCharacter, SplitOptions};

/// Iterator over the fragments of a string.
///
/// At each position the alternatives are tried in a fixed order: separator
/// (when not blank), each delimiter pair's open then close literal, then a
/// whitespace run. The first one that matches wins.
///
/// # Examples
///
/// ```
/// use textsplit::{Fragments, SplitOptions};
///
/// let options = SplitOptions::from(",");
/// let fragments: Vec<_> = Fragments::new("a(1, 2) , b", &options).collect();
/// assert_eq!(fragments, vec!["a", "(", "1", ", ", "2", ")", " , ", "b"]);
/// ```
pub struct Fragments<'a> {
    input: &'a str,
    pos: usize,
    separator: &'a str,
    delimiters: Vec<&'a str>,
    /// A matched delimiter waiting behind the text that preceded it.
    pending: Option<&'a str>,
}

impl<'a> Fragments<'a> {
    pub fn new(input: &'a str, options: &'a SplitOptions) -> Self {
        Self::with_pairs(input, options, &options.open_close_characters)
    }

    /// Lexes with an explicit delimiter table instead of the one in `options`.
    pub(crate) fn with_pairs(
        input: &'a str,
        options: &'a SplitOptions,
        pairs: &'a [OpenCloseCharacter],
    ) -> Self {
        let mut delimiters = Vec::with_capacity(pairs.len() * 2);

        for pair in pairs {
            delimiters.push(pair.open.as_str());
            if !pair.is_symmetric() {
                delimiters.push(pair.close.as_str());
            }
        }
        delimiters.retain(|d| !d.is_empty());

        Self {
            input,
            pos: 0,
            separator: options.trimmed_separator(),
            delimiters,
            pending: None,
        }
    }

    /// Length of the match starting at byte `at`, if any alternative matches.
    fn match_at(&self, at: usize) -> Option<usize> {
        let rest = &self.input[at..];
        let lead = rest.len() - rest.trim_start().len();

        if !self.separator.is_empty() {
            let after = &rest[lead..];
            if let Some(tail) = after.strip_prefix(self.separator) {
                let trail = tail.len() - tail.trim_start().len();
                return Some(lead + self.separator.len() + trail);
            }
        }

        if let Some(delimiter) = self.delimiters.iter().find(|d| rest.starts_with(**d)) {
            return Some(delimiter.len());
        }

        (lead > 0).then_some(lead)
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let mut cursor = start;

        while cursor < self.input.len() {
            if let Some(len) = self.match_at(cursor) {
                let matched = &self.input[cursor..cursor + len];
                self.pos = cursor + len;

                if cursor > start {
                    self.pending = Some(matched);
                    return Some(&self.input[start..cursor]);
                }
                return Some(matched);
            }

            // Step over one character of plain text.
            cursor += self.input[cursor..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }

        self.pos = self.input.len();
        Some(&self.input[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex<'a>(input: &'a str, options: &'a SplitOptions) -> Vec<&'a str> {
        Fragments::new(input, options).collect()
    }

    #[test]
    fn test_empty_input() {
        let options = SplitOptions::default();
        assert!(lex("", &options).is_empty());
    }

    #[test]
    fn test_concatenation_restores_input() {
        let options = SplitOptions::default();
        let input = "  linear, 'left 0' , from(rgb(4, 94, 170))  ";
        assert_eq!(lex(input, &options).concat(), input);
    }

    #[test]
    fn test_separator_swallows_whitespace() {
        let options = SplitOptions::from(",");
        assert_eq!(lex("a  ,  b", &options), vec!["a", "  ,  ", "b"]);
    }

    #[test]
    fn test_whitespace_without_separator() {
        let options = SplitOptions::from(",");
        assert_eq!(lex("left 0", &options), vec!["left", " ", "0"]);
    }

    #[test]
    fn test_blank_separator_uses_whitespace_runs() {
        let options = SplitOptions::from("");
        assert_eq!(lex(" a    b ", &options), vec![" ", "a", "    ", "b", " "]);
    }

    #[test]
    fn test_escaped_quotes_are_single_fragments() {
        let options = SplitOptions::from("");
        assert_eq!(
            lex(r"'\'a\',b'", &options),
            vec!["'", r"\'", "a", r"\'", ",b", "'"]
        );
    }

    #[test]
    fn test_custom_pairs() {
        let options = SplitOptions::from(" ")
            .open_close_characters(vec![OpenCloseCharacter::new("<", ">")]);
        assert_eq!(lex("a<b>c", &options), vec!["a", "<", "b", ">", "c"]);
    }

    #[test]
    fn test_multibyte_text() {
        let options = SplitOptions::from(",");
        assert_eq!(lex("日本,語(x)", &options), vec!["日本", ",", "語", "(", "x", ")"]);
    }
}
