use thiserror::Error;

use colorconv::ColorParseError;
use textsplit::SplitError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, UtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(color: &str) -> Result<colorconv::Rgba> {
        Ok(colorconv::string_to_rgba(color)?)
    }

    #[test]
    fn test_color_error_converts() {
        let err = parse("nope").unwrap_err();
        assert!(matches!(err, UtilsError::Color(ColorParseError::UnsupportedFormat(_))));
        assert_eq!(err.to_string(), "Color error: unsupported color format: nope");
    }

    #[test]
    fn test_split_error_converts() {
        let err: UtilsError = textsplit::OpenCloseCharacter::new("<", ">")
            .with_ignore("(")
            .unwrap_err()
            .into();
        assert!(matches!(err, UtilsError::Split(SplitError::InvalidIgnorePattern(_))));
    }
}
