//! Integration tests for color string conversion.

use colorconv::{COLOR_MODELS, ColorParseError, Rgba, cut_hex, hex_to_rgba, string_to_rgba, to_full_hex};

// ============================================================================
// Hex helpers
// ============================================================================

#[test]
fn cut_and_expand_hex() {
    assert_eq!(cut_hex("#000000"), "000000");
    assert_eq!(to_full_hex("#123"), "#112233");
    assert_eq!(to_full_hex("#123a"), "#112233aa");
}

#[test]
fn hex_examples() {
    assert_eq!(hex_to_rgba("#201045").unwrap().to_array(), [32.0, 16.0, 69.0, 1.0]);
    assert_eq!(hex_to_rgba("#000000").unwrap().to_array(), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(hex_to_rgba("#FFFFFFFF").unwrap().to_array(), [255.0, 255.0, 255.0, 1.0]);
}

// ============================================================================
// string_to_rgba
// ============================================================================

#[test]
fn string_examples() {
    let cases = [
        ("#000000", [0.0, 0.0, 0.0, 1.0]),
        ("#000", [0.0, 0.0, 0.0, 1.0]),
        ("rgb(100, 100, 100)", [100.0, 100.0, 100.0, 1.0]),
        ("rgba(100, 100, 100, 0.5)", [100.0, 100.0, 100.0, 0.5]),
        ("hsl(150, 0.5, 0.4)", [51.0, 153.0, 102.0, 1.0]),
        ("hsla(150, 50%, 40%, 0.2)", [51.0, 153.0, 102.0, 0.2]),
        ("  rgb(1,2,3)  ", [1.0, 2.0, 3.0, 1.0]),
    ];

    for (text, expected) in cases {
        assert_eq!(string_to_rgba(text).unwrap().to_array(), expected, "{}", text);
    }
}

#[test]
fn string_models_are_all_accepted() {
    for model in COLOR_MODELS {
        let color = string_to_rgba(&format!("{}(0, 0, 0)", model)).unwrap();
        assert_eq!(color, Rgba::default(), "{}", model);
    }
}

#[test]
fn string_rejects_named_colors() {
    assert_eq!(
        string_to_rgba("transparent"),
        Err(ColorParseError::UnsupportedFormat("transparent".to_string()))
    );
}

#[test]
fn error_messages() {
    let err = string_to_rgba("lab(1, 2, 3)").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown color model: lab");
}
