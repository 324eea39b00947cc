//! Error types for color conversion.

use thiserror::Error;

/// Errors that can occur when converting a color string.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A component of a functional color is not a number.
    #[error("invalid color component: {0}")]
    InvalidComponent(String),

    /// The function name is not one of `rgb`, `rgba`, `hsl`, `hsla`.
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// The function form is missing its name, its arguments or a bracket.
    #[error("malformed color function: {0}")]
    MalformedFunction(String),

    /// Neither a hex color nor a color function.
    #[error("unsupported color format: {0}")]
    UnsupportedFormat(String),
}
