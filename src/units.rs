//! Conversion of CSS lengths to pixels.
//!
//! Absolute units (`cm`, `mm`, `in`, `pt`, `pc`) convert at 96 px per inch.
//! Relative units need a base: `%` takes it from the [`UnitSize`], viewport
//! units (`vw`, `vh`, `vmax`, `vmin`) fall back to the converter's
//! [`Viewport`]. Unknown units return the bare number.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use textsplit::{UnitValue, split_unit};

/// The visible area viewport units are relative to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Preset {
    /// Units per inch.
    Absolute(f64),
    Percent,
    ViewportWidth,
    ViewportHeight,
    ViewportMax,
    ViewportMin,
}

impl Preset {
    fn apply(self, value: f64, size: Option<f64>, viewport: Viewport) -> f64 {
        match self {
            Preset::Absolute(per_inch) => value * 96.0 / per_inch,
            Preset::Percent => value * size.unwrap_or(f64::NAN) / 100.0,
            Preset::ViewportWidth => value / 100.0 * size.unwrap_or(viewport.width),
            Preset::ViewportHeight => value / 100.0 * size.unwrap_or(viewport.height),
            Preset::ViewportMax => {
                value / 100.0 * size.unwrap_or(viewport.width.max(viewport.height))
            }
            Preset::ViewportMin => {
                value / 100.0 * size.unwrap_or(viewport.width.min(viewport.height))
            }
        }
    }
}

static UNIT_PRESETS: Lazy<HashMap<&'static str, Preset>> = Lazy::new(|| {
    HashMap::from([
        ("cm", Preset::Absolute(2.54)),
        ("mm", Preset::Absolute(254.0)),
        ("in", Preset::Absolute(1.0)),
        ("pt", Preset::Absolute(72.0)),
        ("pc", Preset::Absolute(6.0)),
        ("%", Preset::Percent),
        ("vw", Preset::ViewportWidth),
        ("vh", Preset::ViewportHeight),
        ("vmax", Preset::ViewportMax),
        ("vmin", Preset::ViewportMin),
    ])
});

/// Returns `true` if `unit` has a built-in conversion.
pub fn is_preset_unit(unit: &str) -> bool {
    UNIT_PRESETS.contains_key(unit)
}

/// A per-unit entry of [`UnitSize::Table`].
#[derive(Clone)]
pub enum SizeEntry {
    /// Converts the number directly.
    Function(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
    /// Base size handed to the unit's built-in conversion.
    Size(f64),
}

impl fmt::Debug for SizeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeEntry::Function(_) => f.write_str("Function(..)"),
            SizeEntry::Size(size) => f.debug_tuple("Size").field(size).finish(),
        }
    }
}

/// The base a relative length is measured against.
#[derive(Clone, Debug)]
pub enum UnitSize {
    /// Base for `%`.
    Scalar(f64),
    /// Per-unit conversions, keyed by unit.
    Table(HashMap<String, SizeEntry>),
}

impl Default for UnitSize {
    fn default() -> Self {
        UnitSize::Table(HashMap::new())
    }
}

impl From<f64> for UnitSize {
    fn from(size: f64) -> Self {
        UnitSize::Scalar(size)
    }
}

impl UnitSize {
    /// An empty table.
    pub fn table() -> Self {
        Self::default()
    }

    /// Sets the base size for `unit`. Turns a scalar into a table.
    pub fn with_size(self, unit: impl Into<String>, size: f64) -> Self {
        self.with_entry(unit.into(), SizeEntry::Size(size))
    }

    /// Sets a conversion function for `unit`. Turns a scalar into a table.
    pub fn with_function<F>(self, unit: impl Into<String>, convert: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.with_entry(unit.into(), SizeEntry::Function(Arc::new(convert)))
    }

    fn with_entry(self, unit: String, entry: SizeEntry) -> Self {
        let mut table = match self {
            UnitSize::Table(table) => table,
            UnitSize::Scalar(_) => HashMap::new(),
        };
        table.insert(unit, entry);
        UnitSize::Table(table)
    }
}

/// Converts lengths such as `2cm` or `50%` to pixels.
///
/// ```
/// use anim_utils::units::{UnitConverter, UnitSize, Viewport};
///
/// let converter = UnitConverter::new(Viewport::new(1000.0, 500.0));
///
/// assert_eq!(converter.convert("50%", &UnitSize::from(200.0)), 100.0);
/// assert_eq!(converter.convert("10vw", &UnitSize::default()), 100.0);
/// assert_eq!(converter.convert("1in", &UnitSize::default()), 96.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitConverter {
    viewport: Viewport,
}

impl UnitConverter {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Converts `pos` to pixels against `size`.
    ///
    /// A table entry for the unit takes priority: a function is called with
    /// the number, a size is passed to the unit's built-in conversion. A
    /// scalar size only applies to `%`. Everything else goes through the
    /// built-in conversion, and unknown units return the number unchanged.
    pub fn convert(&self, pos: &str, size: &UnitSize) -> f64 {
        let UnitValue { value, unit, .. } = split_unit(pos);
        let preset = UNIT_PRESETS.get(unit.as_str()).copied();

        match size {
            UnitSize::Table(table) => match (table.get(&unit), preset) {
                (Some(SizeEntry::Function(convert)), _) => return convert(value),
                (Some(SizeEntry::Size(base)), Some(preset)) => {
                    return preset.apply(value, Some(*base), self.viewport);
                }
                _ => {}
            },
            UnitSize::Scalar(base) if unit == "%" => return value * base / 100.0,
            UnitSize::Scalar(_) => {}
        }

        match preset {
            Some(preset) => preset.apply(value, None, self.viewport),
            None => {
                log::debug!("no conversion for unit {:?} in {:?}, using {}", unit, pos, value);
                value
            }
        }
    }
}
