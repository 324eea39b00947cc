//! # colorconv - color string conversion
//!
//! Converts hex, `rgb()`/`rgba()` and `hsl()`/`hsla()` strings into RGBA
//! values. Function arguments are split with [`textsplit`], so nested or
//! oddly spaced arguments are handled the same way as any other CSS value.
//!
//! ```rust
//! use colorconv::{string_to_rgba, Rgba};
//!
//! assert_eq!(string_to_rgba("#fff").unwrap(), Rgba::rgb(255.0, 255.0, 255.0));
//! assert_eq!(string_to_rgba("hsla(0, 100%, 50%, 0.5)").unwrap(), Rgba::new(255.0, 0.0, 0.0, 0.5));
//! ```

pub mod error;
pub mod rgba;

pub use error::ColorParseError;
pub use rgba::{
    COLOR_MODELS, HSL, HSLA, RGB, RGBA, Rgba, cut_hex, hex_to_rgba, hsl_to_rgba, string_to_rgba,
    to_full_hex,
};
