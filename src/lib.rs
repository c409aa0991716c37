//! # khl-card
//!
//! Typed builder for KOOK card messages.
//!
//! A card is a tree of display modules plus three presentation attributes
//! (theme, size, color). This crate builds that tree in memory and emits
//! it as a JSON document the chat client renders.
//!
//! ## Design Principles
//!
//! 1. **Canonical Attributes**: Theme, size and color accept typed values
//!    or raw strings, but are always stored and emitted as strings.
//!
//! 2. **Open Module Set**: Cards hold modules through the `Module` trait.
//!    Any type that can build its own JSON document can be appended.
//!
//! 3. **Pure Builds**: `build()` never mutates, so a card can be built and
//!    sent any number of times.
//!
//! ## Modules
//!
//! - `core`: Errors and configuration
//! - `attributes`: Theme, size, color and their normalization
//! - `modules`: The `Module` trait and basic modules
//! - `cards`: `Card` and `CardMessage`

pub mod core;
pub mod attributes;
pub mod modules;
pub mod cards;

// Re-export commonly used types
pub use crate::core::{CardConfig, CardError, RenderConfig, Result};

pub use crate::attributes::{
    normalize_color, normalize_theme_or_size,
    Color, ColorValue, NamedColor, Size, Theme,
};

pub use crate::modules::{Divider, Header, Module, Section, Text};

pub use crate::cards::{Card, CardMessage};
