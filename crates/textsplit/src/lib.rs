//! # textsplit - bracket and quote aware text splitting
//!
//! Splits strings like CSS values, selector lists or transform chains on a
//! separator without breaking parenthesized or quoted regions apart.
//!
//! ## Quick Start
//!
//! ```rust
//! use textsplit::{split_comma, split_space};
//!
//! assert_eq!(
//!     split_comma("linear, left 0, from(rgb(4, 94, 170))"),
//!     vec!["linear", "left 0", "from(rgb(4, 94, 170))"]
//! );
//! assert_eq!(
//!     split_space("translate(10px) rotate(10deg)"),
//!     vec!["translate(10px)", "rotate(10deg)"]
//! );
//! ```
//!
//! ## How splitting works
//!
//! 1. The text is lexed into [`Fragments`]: separators, delimiter literals,
//!    whitespace runs and the text between them.
//! 2. A [`Scanner`] walks the fragments. Open delimiters start a region that
//!    extends to the matching close, and separators flush the current segment.
//! 3. [`split_text`] runs the scanner. If a close delimiter shows up with no
//!    open, that pair is dropped from the table and the text is split again.
//!
//! Delimiter pairs can carry an ignore pattern so that, for example, the `>`
//! of `=>` does not close a `<...>` region.
//!
//! ## Modules
//!
//! - [`options`]: [`SplitOptions`] and the [`OpenCloseCharacter`] table
//! - [`fragments`]: the fragment lexer
//! - [`scanner`]: region matching and the `split_*` entry points
//! - [`bracket`]: `prefix(value)suffix` splitting
//! - [`units`]: number/unit splitting and float prefix parsing
//! - [`error`]: error types

pub mod bracket;
pub mod error;
pub mod fragments;
pub mod options;
pub mod scanner;
pub mod units;

pub use bracket::{Bracket, split_bracket};
pub use error::SplitError;
pub use fragments::Fragments;
pub use options::{OPEN_CLOSED_CHARACTERS, OpenCloseCharacter, SplitOptions};
pub use scanner::{Scanner, split_comma, split_space, split_text};
pub use units::{UnitValue, parse_float, split_unit};
