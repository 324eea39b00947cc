//! Delimiter pairs and split configuration.
//!
//! A split is driven by [`SplitOptions`]: the separator to break on, a few
//! flags controlling how open/close regions are emitted, and the table of
//! [`OpenCloseCharacter`] pairs whose regions are never broken apart.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SplitError;

/// A pair of delimiters that encloses a region the splitter must not break.
///
/// `open` and `close` may be equal (quotes) or distinct (parentheses).
///
/// # Examples
///
/// ```
/// use textsplit::OpenCloseCharacter;
///
/// let paren = OpenCloseCharacter::new("(", ")");
/// assert!(!paren.is_symmetric());
///
/// // `=>` must not open or close a `<...>` region.
/// let angle = OpenCloseCharacter::new("<", ">").with_ignore(r"=>|\s>\s|\s<\s").unwrap();
/// assert!(angle.ignore.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct OpenCloseCharacter {
    pub open: String,
    pub close: String,
    /// Context pattern that suppresses delimiter recognition.
    ///
    /// Tested against the fragments surrounding a candidate open or close.
    pub ignore: Option<Regex>,
}

impl OpenCloseCharacter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            ignore: None,
        }
    }

    /// A pair whose open and close literal are the same, like a quote.
    pub fn symmetric(character: impl Into<String>) -> Self {
        let character = character.into();
        Self::new(character.clone(), character)
    }

    /// Attaches an ignore pattern, compiling it.
    pub fn with_ignore(mut self, pattern: &str) -> Result<Self, SplitError> {
        self.ignore = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

impl PartialEq for OpenCloseCharacter {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open
            && self.close == other.close
            && self.ignore.as_ref().map(Regex::as_str) == other.ignore.as_ref().map(Regex::as_str)
    }
}

/// The built-in delimiter table: parentheses, double and single quotes, and
/// their backslash-escaped forms, in that priority order.
pub static OPEN_CLOSED_CHARACTERS: Lazy<Vec<OpenCloseCharacter>> = Lazy::new(|| {
    vec![
        OpenCloseCharacter::new("(", ")"),
        OpenCloseCharacter::symmetric("\""),
        OpenCloseCharacter::symmetric("'"),
        OpenCloseCharacter::symmetric("\\\""),
        OpenCloseCharacter::symmetric("\\'"),
    ]
});

/// Configuration for [`split_text`](crate::split_text).
///
/// A plain string converts into options with that separator and every other
/// field at its default.
///
/// # Examples
///
/// ```
/// use textsplit::{split_text, SplitOptions};
///
/// let options = SplitOptions::new().separator(";");
/// assert_eq!(split_text("a:a(;);b:a", options), vec!["a:a(;)", "b:a"]);
///
/// // Same thing, from a bare separator.
/// assert_eq!(split_text("a:a(;);b:a", ";"), vec!["a:a(;)", "b:a"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SplitOptions {
    /// Separator to break on. A blank separator breaks on any whitespace run.
    pub separator: String,
    /// Stop at the first separator, or after the first region when regions
    /// are emitted as segments.
    pub separate_first: bool,
    /// Ignore bare separators; only open/close regions cause breaks.
    pub separate_only_open_close: bool,
    /// Emit every terminated open/close region as its own segment.
    ///
    /// `None` follows `separate_only_open_close`.
    pub separate_open_close: Option<bool>,
    /// Delimiter pairs, in priority order.
    pub open_close_characters: Vec<OpenCloseCharacter>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            separate_first: false,
            separate_only_open_close: false,
            separate_open_close: None,
            open_close_characters: OPEN_CLOSED_CHARACTERS.clone(),
        }
    }
}

impl SplitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn separate_first(mut self, value: bool) -> Self {
        self.separate_first = value;
        self
    }

    pub fn separate_only_open_close(mut self, value: bool) -> Self {
        self.separate_only_open_close = value;
        self
    }

    pub fn separate_open_close(mut self, value: bool) -> Self {
        self.separate_open_close = Some(value);
        self
    }

    pub fn open_close_characters(mut self, characters: Vec<OpenCloseCharacter>) -> Self {
        self.open_close_characters = characters;
        self
    }

    /// Whether open/close regions become their own segments.
    pub fn is_separate_open_close(&self) -> bool {
        self.separate_open_close.unwrap_or(self.separate_only_open_close)
    }

    /// The separator as it is matched: surrounding whitespace never counts.
    pub(crate) fn trimmed_separator(&self) -> &str {
        self.separator.trim()
    }

    /// Whether a trimmed fragment is a break point.
    pub(crate) fn is_separator(&self, fragment: &str) -> bool {
        let separator = self.trimmed_separator();

        if separator.is_empty() {
            fragment.is_empty()
        } else {
            fragment == separator
        }
    }
}

impl From<&str> for SplitOptions {
    fn from(separator: &str) -> Self {
        Self::new().separator(separator)
    }
}

impl From<String> for SplitOptions {
    fn from(separator: String) -> Self {
        Self::new().separator(separator)
    }
}

impl From<&SplitOptions> for SplitOptions {
    fn from(options: &SplitOptions) -> Self {
        options.clone()
    }
}
