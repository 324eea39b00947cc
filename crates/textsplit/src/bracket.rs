//! Splitting of `prefix(value)suffix` forms.

/// The three parts of a bracketed form such as `rgb(1, 2, 3)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bracket {
    /// Everything before the first `(`.
    pub prefix: String,
    /// Everything between the first `(` and the last `)`.
    pub value: String,
    /// Everything after the last `)`.
    pub suffix: String,
}

/// Splits `text` around its outermost parentheses.
///
/// The value runs from the first `(` to the LAST `)`, so nested brackets stay
/// inside it. Returns `None` when there is no `(` with a `)` somewhere after it.
///
/// # Examples
///
/// ```
/// use textsplit::split_bracket;
///
/// let bracket = split_bracket("a(1, 2)b").unwrap();
/// assert_eq!(bracket.prefix, "a");
/// assert_eq!(bracket.value, "1, 2");
/// assert_eq!(bracket.suffix, "b");
///
/// assert!(split_bracket("no brackets").is_none());
/// ```
pub fn split_bracket(text: &str) -> Option<Bracket> {
    let open = text.find('(')?;
    let close = text.rfind(')').filter(|&close| close > open)?;

    Some(Bracket {
        prefix: text[..open].to_string(),
        value: text[open + 1..close].to_string(),
        suffix: text[close + 1..].to_string(),
    })
}
