//! The card document.
//!
//! A `Card` owns an ordered list of modules plus three presentation
//! attributes. Attributes are stored as canonical strings only; typed
//! inputs (`Theme`, `Size`, `Color`, `NamedColor`) are normalized as they
//! come in.
//!
//! ```
//! use khl_card::attributes::{NamedColor, Theme};
//! use khl_card::cards::Card;
//! use khl_card::modules::{Divider, Header, Section};
//!
//! let mut card = Card::new().with_theme(Theme::Success);
//! card.append(Header::new("Deploy finished"));
//! card.append(Divider);
//! card.append(Section::kmarkdown("**3** services updated"));
//! card.set_color(NamedColor::Green).unwrap();
//!
//! let doc = card.build();
//! assert_eq!(doc["theme"], "success");
//! assert_eq!(doc["color"], "#55ff55");
//! assert_eq!(doc["modules"].as_array().unwrap().len(), 3);
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::render::to_json_text;
use crate::attributes::{normalize_color, normalize_theme_or_size, ColorValue, Size, Theme};
use crate::core::config::{CardConfig, RenderConfig};
use crate::core::error::{CardError, Result};
use crate::modules::Module;

/// A card document under construction.
#[derive(Debug)]
pub struct Card {
    theme: String,
    size: String,
    color: Option<String>,
    modules: Vec<Box<dyn Module>>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            theme: Theme::default().as_str().to_string(),
            size: Size::default().as_str().to_string(),
            color: None,
            modules: Vec::new(),
        }
    }
}

impl Card {
    /// Document type tag. Not configurable.
    pub const TYPE: &'static str = "card";

    /// Create an empty card with the default theme (`primary`) and size (`lg`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card holding `modules`, in order.
    #[must_use]
    pub fn with_modules(modules: impl IntoIterator<Item = Box<dyn Module>>) -> Self {
        Self {
            modules: modules.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create an empty card with attributes taken from `config`.
    #[must_use]
    pub fn from_config(config: &CardConfig) -> Self {
        Self {
            theme: normalize_theme_or_size(&config.theme),
            size: normalize_theme_or_size(&config.size),
            color: config.color.clone(),
            modules: Vec::new(),
        }
    }

    /// Set the theme (builder pattern).
    #[must_use]
    pub fn with_theme(mut self, theme: impl AsRef<str>) -> Self {
        self.set_theme(theme);
        self
    }

    /// Set the size (builder pattern).
    #[must_use]
    pub fn with_size(mut self, size: impl AsRef<str>) -> Self {
        self.set_size(size);
        self
    }

    /// Set the color (builder pattern).
    pub fn with_color(mut self, color: impl Into<ColorValue>) -> Result<Self> {
        self.set_color(color)?;
        Ok(self)
    }

    /// Current theme string.
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Current size string.
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Current color string, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Replace the theme. Unknown strings are kept as given.
    pub fn set_theme(&mut self, theme: impl AsRef<str>) {
        self.theme = normalize_theme_or_size(theme);
        debug!(theme = %self.theme, "card theme set");
    }

    /// Replace the size. Unknown strings are kept as given.
    pub fn set_size(&mut self, size: impl AsRef<str>) {
        self.size = normalize_theme_or_size(size);
        debug!(size = %self.size, "card size set");
    }

    /// Replace the color, or clear it when the input is unset/`null`.
    ///
    /// On error the current color is left untouched.
    pub fn set_color(&mut self, color: impl Into<ColorValue>) -> Result<()> {
        self.color = normalize_color(color)?;
        debug!(color = ?self.color, "card color set");
        Ok(())
    }

    /// Remove the color.
    pub fn clear_color(&mut self) {
        self.color = None;
        debug!("card color cleared");
    }

    /// Append a module to the end of the card.
    pub fn append(&mut self, module: impl Module + 'static) {
        self.append_boxed(Box::new(module));
    }

    /// Append an already boxed module.
    pub fn append_boxed(&mut self, module: Box<dyn Module>) {
        self.modules.push(module);
        trace!(len = self.modules.len(), "module appended");
    }

    /// Remove all modules. Attributes are kept.
    pub fn clear(&mut self) {
        self.modules.clear();
        trace!("modules cleared");
    }

    /// Get the module at `index`.
    pub fn get(&self, index: usize) -> Result<&dyn Module> {
        self.modules
            .get(index)
            .map(|m| &**m)
            .ok_or(CardError::IndexOutOfRange {
                index,
                len: self.modules.len(),
            })
    }

    /// Number of modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the card has no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate over modules in document order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Module> {
        self.modules.iter().map(|m| &**m)
    }

    /// Build the card document.
    ///
    /// `type`, `theme`, `size` and `modules` are always present; `color`
    /// only when set. Each module is built in order. Does not mutate the
    /// card, so repeated calls give equal documents.
    #[must_use]
    pub fn build(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("type".into(), Value::from(Self::TYPE));
        doc.insert("theme".into(), Value::from(self.theme.as_str()));
        doc.insert("size".into(), Value::from(self.size.as_str()));
        let modules = self.modules.iter().map(|m| m.build()).collect();
        doc.insert("modules".into(), Value::Array(modules));
        if let Some(color) = &self.color {
            doc.insert("color".into(), Value::from(color.as_str()));
        }

        trace!(modules = self.modules.len(), "card built");
        Value::Object(doc)
    }

    /// Build and render as indented JSON text.
    pub fn build_to_json(&self) -> Result<String> {
        self.build_to_json_with(&RenderConfig::default())
    }

    /// Build and render as JSON text with explicit formatting.
    pub fn build_to_json_with(&self, config: &RenderConfig) -> Result<String> {
        to_json_text(&self.build(), config)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}

impl Extend<Box<dyn Module>> for Card {
    fn extend<I: IntoIterator<Item = Box<dyn Module>>>(&mut self, iter: I) {
        self.modules.extend(iter);
    }
}

impl FromIterator<Box<dyn Module>> for Card {
    fn from_iter<I: IntoIterator<Item = Box<dyn Module>>>(iter: I) -> Self {
        Self::with_modules(iter)
    }
}
