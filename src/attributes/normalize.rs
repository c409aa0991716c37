//! Attribute normalization.
//!
//! Every attribute input is reduced to its canonical string here, at the
//! boundary. Cards never store an enum or color object.

use serde_json::Value;
use tracing::debug;

use super::color::ColorValue;
use crate::core::error::{CardError, Result};

/// Resolve a color input to its canonical string, or `None` for no color.
///
/// Strings pass through unchanged. Dynamically typed JSON input must be
/// `null` or a string; any other shape is rejected.
pub fn normalize_color(input: impl Into<ColorValue>) -> Result<Option<String>> {
    match input.into() {
        ColorValue::Unset | ColorValue::Json(Value::Null) => Ok(None),
        ColorValue::Text(s) | ColorValue::Json(Value::String(s)) => Ok(Some(s)),
        ColorValue::Rgb(color) => Ok(Some(color.to_string())),
        ColorValue::Named(named) => Ok(Some(named.color().to_string())),
        ColorValue::Json(other) => {
            debug!(value = %other, "rejected color input");
            Err(CardError::InvalidAttribute {
                attribute: "color",
                value: other.to_string(),
            })
        }
    }
}

/// Resolve a theme or size input to its canonical string.
///
/// Raw strings are not checked against the known members.
pub fn normalize_theme_or_size(input: impl AsRef<str>) -> String {
    input.as_ref().to_string()
}
