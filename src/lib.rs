//! # anim-utils - string and number helpers for animation code
//!
//! Re-exports the [`textsplit`] splitter and the [`colorconv`] color
//! parser, and adds the numeric, unit and case helpers that sit next to
//! them when reading CSS-like values.
//!
//! ```rust
//! use anim_utils::{split_comma, split_bracket, string_to_rgba};
//!
//! let bracket = split_bracket("translate(10px, 20px)").unwrap();
//! assert_eq!(bracket.prefix, "translate");
//! assert_eq!(split_comma(&bracket.value), vec!["10px", "20px"]);
//!
//! assert_eq!(string_to_rgba("#fff").unwrap().to_array(), [255.0, 255.0, 255.0, 1.0]);
//! ```

pub mod error;
pub mod math;
pub mod text;
pub mod units;

pub use colorconv::{
    COLOR_MODELS, ColorParseError, HSL, HSLA, RGB, RGBA, Rgba, cut_hex, hex_to_rgba, hsl_to_rgba,
    string_to_rgba, to_full_hex,
};
pub use textsplit::{
    Bracket, OPEN_CLOSED_CHARACTERS, OpenCloseCharacter, SplitError, SplitOptions, UnitValue,
    parse_float, split_bracket, split_comma, split_space, split_text, split_unit,
};

pub use error::{Result, UtilsError};
pub use math::{
    KeepRatio, REVERSE_TINY_NUM, TINY_NUM, average, between, calculate_bound_size,
    check_bound_size, counter, dot, get_center_point, get_dist, get_rad, get_shape_direction, sum,
    throttle, throttle_array,
};
pub use text::{camelize, decamelize, replace_once, replace_once_with};
pub use units::{SizeEntry, UnitConverter, UnitSize, Viewport};
