//! Fixed symbol sets for card theme and size.

use serde::{Deserialize, Serialize};

/// Card theme. Controls the accent of the card border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    /// No theme accent.
    None,
}

impl Theme {
    /// All themes, in declaration order.
    pub const ALL: [Theme; 7] = [
        Theme::Primary,
        Theme::Secondary,
        Theme::Success,
        Theme::Danger,
        Theme::Warning,
        Theme::Info,
        Theme::None,
    ];

    /// Canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Primary => "primary",
            Theme::Secondary => "secondary",
            Theme::Success => "success",
            Theme::Danger => "danger",
            Theme::Warning => "warning",
            Theme::Info => "info",
            Theme::None => "none",
        }
    }
}

impl AsRef<str> for Theme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card size.
///
/// `Lg` only takes effect on desktop clients; mobile always renders `sm`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Lg,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Sm, Size::Lg];

    /// Canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Lg => "lg",
        }
    }
}

impl AsRef<str> for Size {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
