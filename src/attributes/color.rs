//! Card color values.
//!
//! A card color can be given three ways:
//!
//! - `Color`: an RGB value, rendered as `#rrggbb`
//! - `NamedColor`: one of a fixed 16-color palette
//! - a raw string literal, taken as-is
//!
//! `ColorValue` is the union of everything the color setters accept.
//! It is resolved to a canonical string once, by `normalize_color`.

use std::str::FromStr;

use serde_json::Value;

use crate::core::error::{CardError, Result};

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn from_hex(literal: &str) -> Result<Self> {
        let digits = literal.strip_prefix('#').unwrap_or(literal);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CardError::InvalidColor(literal.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| CardError::InvalidColor(literal.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// The named color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The RGB value behind this name.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            NamedColor::Black => Color::rgb(0x00, 0x00, 0x00),
            NamedColor::DarkBlue => Color::rgb(0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => Color::rgb(0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => Color::rgb(0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => Color::rgb(0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => Color::rgb(0xaa, 0x00, 0xaa),
            NamedColor::Gold => Color::rgb(0xff, 0xaa, 0x00),
            NamedColor::Gray => Color::rgb(0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => Color::rgb(0x55, 0x55, 0x55),
            NamedColor::Blue => Color::rgb(0x55, 0x55, 0xff),
            NamedColor::Green => Color::rgb(0x55, 0xff, 0x55),
            NamedColor::Aqua => Color::rgb(0x55, 0xff, 0xff),
            NamedColor::Red => Color::rgb(0xff, 0x55, 0x55),
            NamedColor::LightPurple => Color::rgb(0xff, 0x55, 0xff),
            NamedColor::Yellow => Color::rgb(0xff, 0xff, 0x55),
            NamedColor::White => Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl std::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.color(), f)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        named.color()
    }
}

/// Any input accepted by the card color setters.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColorValue {
    /// No color.
    #[default]
    Unset,
    /// A literal, passed through unchanged.
    Text(String),
    Rgb(Color),
    Named(NamedColor),
    /// Dynamically typed input. Only `null` and strings are accepted.
    Json(Value),
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        ColorValue::Text(s.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::Text(s)
    }
}

impl From<Color> for ColorValue {
    fn from(c: Color) -> Self {
        ColorValue::Rgb(c)
    }
}

impl From<NamedColor> for ColorValue {
    fn from(c: NamedColor) -> Self {
        ColorValue::Named(c)
    }
}

impl From<Value> for ColorValue {
    fn from(v: Value) -> Self {
        ColorValue::Json(v)
    }
}

impl<T: Into<ColorValue>> From<Option<T>> for ColorValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ColorValue::Unset, Into::into)
    }
}
