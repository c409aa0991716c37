//! Card configuration types.
//!
//! - `RenderConfig`: How JSON text is emitted (indentation)
//! - `CardConfig`: Default attributes applied by `Card::from_config`
//!
//! Both are plain serde structs so applications can load them from
//! their own configuration files.

use serde::{Deserialize, Serialize};

use crate::attributes::{Size, Theme};

/// JSON text emission settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per indentation level. `None` emits compact single-line JSON.
    pub indent: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent: Some(4) }
    }
}

impl RenderConfig {
    /// Compact output, no whitespace between tokens.
    #[must_use]
    pub fn compact() -> Self {
        Self { indent: None }
    }

    /// Pretty output with a custom indent width.
    #[must_use]
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }
}

/// Default card attributes.
///
/// Values are canonical strings. Theme and size are not checked against
/// the known symbol sets, so server-side additions can be used before
/// this crate learns about them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub theme: String,
    pub size: String,
    /// Color literal, e.g. `#55ffff`. `None` leaves cards uncolored.
    pub color: Option<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default().as_str().to_string(),
            size: Size::default().as_str().to_string(),
            color: None,
        }
    }
}

impl CardConfig {
    /// Set the default theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl AsRef<str>) -> Self {
        self.theme = theme.as_ref().to_string();
        self
    }

    /// Set the default size.
    #[must_use]
    pub fn with_size(mut self, size: impl AsRef<str>) -> Self {
        self.size = size.as_ref().to_string();
        self
    }

    /// Set the default color literal.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
