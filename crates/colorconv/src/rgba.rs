//! RGBA values and conversions from hex, HSL and color strings.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **HSL**: `hsl(h, s, l)`, `hsla(h, s, l, a)`, where `s` and `l` are
//!   fractions or percentages

use std::fmt;

use textsplit::{parse_float, split_bracket, split_comma};

use crate::error::ColorParseError;

pub const RGB: &str = "rgb";
pub const RGBA: &str = "rgba";
pub const HSL: &str = "hsl";
pub const HSLA: &str = "hsla";

/// The color function names [`string_to_rgba`] understands.
pub const COLOR_MODELS: [&str; 4] = [RGB, RGBA, HSL, HSLA];

/// An RGBA color.
///
/// Channels are kept as `f64` because `rgb()` arguments are taken verbatim,
/// fractional values included. Alpha runs from 0.0 (transparent) to 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Removes the `#` from a hex color.
///
/// ```
/// use colorconv::cut_hex;
///
/// assert_eq!(cut_hex("#000000"), "000000");
/// ```
pub fn cut_hex(hex: &str) -> String {
    hex.replacen('#', "", 1)
}

/// Expands a 3 or 4 digit hex color to 6 or 8 digits.
///
/// ```
/// use colorconv::to_full_hex;
///
/// assert_eq!(to_full_hex("#123"), "#112233");
/// assert_eq!(to_full_hex("#123a"), "#112233aa");
/// ```
pub fn to_full_hex(hex: &str) -> String {
    let mut full = String::from("#");

    for c in hex.chars().skip(1).take(4) {
        full.push(c);
        full.push(c);
    }
    full
}

fn hex_channel(digits: &str, start: usize) -> Option<f64> {
    let pair = digits.get(start..start + 2)?;

    if pair.chars().all(|c| c.is_ascii_hexdigit()) {
        u8::from_str_radix(pair, 16).ok().map(f64::from)
    } else {
        None
    }
}

/// Converts a 6 or 8 digit hex color to RGBA.
///
/// The alpha pair is optional and defaults to fully opaque.
///
/// ```
/// use colorconv::{hex_to_rgba, Rgba};
///
/// assert_eq!(hex_to_rgba("#201045").unwrap(), Rgba::rgb(32.0, 16.0, 69.0));
/// assert_eq!(hex_to_rgba("#ffffff00").unwrap().a, 0.0);
/// ```
pub fn hex_to_rgba(hex: &str) -> Result<Rgba, ColorParseError> {
    let digits = cut_hex(hex);
    let invalid = || ColorParseError::InvalidHex(hex.to_string());

    if digits.len() != 6 && digits.len() != 8 {
        return Err(invalid());
    }

    let channel = |start| hex_channel(&digits, start).ok_or_else(invalid);
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 {
        channel(6)? / 255.0
    } else {
        1.0
    };

    Ok(Rgba::new(r, g, b, a))
}

/// Converts HSL to RGBA.
///
/// Hue is in degrees and wraps into `[0, 360)`; saturation and lightness
/// are fractions in `[0, 1]`. Alpha defaults to 1.
///
/// ```
/// use colorconv::{hsl_to_rgba, Rgba};
///
/// assert_eq!(hsl_to_rgba(150.0, 0.5, 0.4, None), Rgba::rgb(51.0, 153.0, 102.0));
/// ```
pub fn hsl_to_rgba(hue: f64, saturation: f64, lightness: f64, alpha: Option<f64>) -> Rgba {
    let mut h = hue;

    if h < 0.0 {
        h += ((h.abs() + 360.0) / 360.0).floor() * 360.0;
    }
    h %= 360.0;

    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else if h < 360.0 {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Rgba::new(
        round_half_up((r + m) * 255.0),
        round_half_up((g + m) * 255.0),
        round_half_up((b + m) * 255.0),
        alpha.unwrap_or(1.0),
    )
}

/// Rounds ties toward positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();

    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

fn parse_component(part: &str) -> Result<f64, ColorParseError> {
    let value = parse_float(part);

    if value.is_nan() {
        Err(ColorParseError::InvalidComponent(part.to_string()))
    } else {
        Ok(value)
    }
}

/// Converts a color string to RGBA.
///
/// Accepts 3, 4, 6 or 8 digit hex colors and the `rgb`, `rgba`, `hsl` and
/// `hsla` functions. Function arguments are split with
/// [`split_comma`](textsplit::split_comma); missing ones keep their defaults
/// (`0` for channels, `1` for alpha).
///
/// ```
/// use colorconv::{string_to_rgba, Rgba};
///
/// assert_eq!(string_to_rgba("#000000").unwrap(), Rgba::rgb(0.0, 0.0, 0.0));
/// assert_eq!(string_to_rgba("rgb(100, 100, 100)").unwrap(), Rgba::rgb(100.0, 100.0, 100.0));
/// assert_eq!(string_to_rgba("hsl(150, 0.5, 0.4)").unwrap(), Rgba::rgb(51.0, 153.0, 102.0));
/// ```
pub fn string_to_rgba(color: &str) -> Result<Rgba, ColorParseError> {
    let color = color.trim();

    if color.starts_with('#') {
        let len = color.chars().count();
        return if len == 4 || len == 5 {
            hex_to_rgba(&to_full_hex(color))
        } else {
            hex_to_rgba(color)
        };
    }

    if !color.contains('(') {
        return Err(ColorParseError::UnsupportedFormat(color.to_string()));
    }

    let bracket = split_bracket(color)
        .filter(|bracket| !bracket.prefix.is_empty() && !bracket.value.is_empty())
        .ok_or_else(|| ColorParseError::MalformedFunction(color.to_string()))?;
    let parts = split_comma(&bracket.value);
    let mut channels = Rgba::default().to_array();

    match bracket.prefix.as_str() {
        RGB | RGBA => {
            for (channel, part) in channels.iter_mut().zip(&parts) {
                *channel = parse_component(part)?;
            }
            Ok(Rgba::from(channels))
        }
        HSL | HSLA => {
            for (channel, part) in channels.iter_mut().zip(&parts) {
                *channel = parse_component(part)?;
                if part.contains('%') {
                    *channel /= 100.0;
                }
            }
            let [h, s, l, a] = channels;
            Ok(hsl_to_rgba(h, s, l, Some(a)))
        }
        model => {
            log::debug!("unknown color model {:?} in {:?}", model, color);
            Err(ColorParseError::UnknownModel(model.to_string()))
        }
    }
}
