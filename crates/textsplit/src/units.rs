//! Number and unit splitting.
//!
//! [`split_unit`] breaks a CSS-like length such as `-10.5px` into a leading
//! prefix, the number and the trailing unit. Numbers are read loosely: the
//! longest valid float prefix wins and anything unparsable becomes `NaN`.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{eof, opt, recognize},
    multi::many1,
    sequence::{pair, terminated, tuple},
};

/// A number together with the text around it.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitValue {
    pub prefix: String,
    /// `NaN` when no number could be located.
    pub value: f64,
    pub unit: String,
}

impl UnitValue {
    fn not_found() -> Self {
        Self {
            prefix: String::new(),
            value: f64::NAN,
            unit: String::new(),
        }
    }

    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }
}

/// Characters that end the prefix.
fn is_numeric_start(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '|' | 'e' | '-' | '+')
}

/// The loose numeric run: digits, dots, minus signs and `e-`/`e+` exponents.
fn numeric_run(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((
        take_while1(|c: char| c.is_ascii_digit() || c == '.' || c == '-'),
        tag("e-"),
        tag("e+"),
    ))))(input)
}

fn unit_parts(input: &str) -> IResult<&str, (&str, &str, &str)> {
    tuple((
        take_while(|c: char| !is_numeric_start(c)),
        numeric_run,
        terminated(take_while(|c: char| !c.is_whitespace()), eof),
    ))(input)
}

/// Splits `text` into prefix, number and unit.
///
/// When the number cannot be located the result has an empty prefix and unit
/// and a `NaN` value.
///
/// # Examples
///
/// ```
/// use textsplit::split_unit;
///
/// let px = split_unit("-10px");
/// assert_eq!((px.prefix.as_str(), px.value, px.unit.as_str()), ("", -10.0, "px"));
///
/// let percent = split_unit("a10%");
/// assert_eq!((percent.prefix.as_str(), percent.value, percent.unit.as_str()), ("a", 10.0, "%"));
///
/// assert!(split_unit("auto").is_nan());
/// ```
pub fn split_unit(text: &str) -> UnitValue {
    match unit_parts(text) {
        Ok((_, (prefix, number, unit))) => UnitValue {
            prefix: prefix.to_string(),
            value: parse_float(number),
            unit: unit.to_string(),
        },
        Err(_) => UnitValue::not_found(),
    }
}

/// Recognizes the longest float literal at the start of the input.
fn float_prefix(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Parses the longest float prefix of `input`.
///
/// Leading whitespace is skipped, trailing garbage is ignored, and input with
/// no numeric prefix yields `NaN`.
///
/// ```
/// use textsplit::parse_float;
///
/// assert_eq!(parse_float(" 1.5.5"), 1.5);
/// assert_eq!(parse_float("-.5em"), -0.5);
/// assert_eq!(parse_float("1e-3"), 0.001);
/// assert!(parse_float("--1").is_nan());
/// ```
pub fn parse_float(input: &str) -> f64 {
    float_prefix(input.trim_start())
        .ok()
        .and_then(|(_, number)| number.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
