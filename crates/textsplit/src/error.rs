//! Error types for text splitting.

use thiserror::Error;

/// Errors that can occur while configuring or running a split.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    /// The `ignore` pattern of a delimiter pair is not a valid regex.
    #[error("invalid ignore pattern: {0}")]
    InvalidIgnorePattern(#[from] regex::Error),

    /// A close delimiter was found outside of any open region.
    ///
    /// `split_text` recovers from this internally by dropping the pair and
    /// splitting again, so callers only see it from [`Scanner::scan`](crate::scanner::Scanner::scan).
    #[error("unbalanced close delimiter {close:?} at fragment {position}")]
    UnbalancedClose {
        /// Index of the offending pair in the active delimiter table.
        pair: usize,
        /// The close literal that was found.
        close: String,
        /// Fragment index where it was found.
        position: usize,
    },
}
