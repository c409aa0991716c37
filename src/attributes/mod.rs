//! Card attributes: theme, size and color.
//!
//! ## Key Types
//!
//! - `Theme`, `Size`: fixed symbol sets
//! - `Color`, `NamedColor`: color values
//! - `ColorValue`: everything a color setter accepts
//!
//! Inputs are reduced to canonical strings by `normalize_color` and
//! `normalize_theme_or_size` before a card stores them.

pub mod color;
pub mod normalize;
pub mod types;

pub use color::{Color, ColorValue, NamedColor};
pub use normalize::{normalize_color, normalize_theme_or_size};
pub use types::{Size, Theme};
