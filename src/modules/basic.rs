//! Basic layout modules.

use serde_json::{json, Value};

use super::{Module, Text};

/// Title line. Headers only render plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub content: String,
}

impl Header {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

impl Module for Header {
    fn build(&self) -> Value {
        json!({"type": "header", "text": Text::plain(self.content.as_str()).build()})
    }
}

/// A block of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub text: Text,
}

impl Section {
    #[must_use]
    pub fn new(text: impl Into<Text>) -> Self {
        Self { text: text.into() }
    }

    /// Section with KMarkdown content.
    #[must_use]
    pub fn kmarkdown(content: impl Into<String>) -> Self {
        Self::new(Text::kmarkdown(content))
    }
}

impl Module for Section {
    fn build(&self) -> Value {
        json!({"type": "section", "text": self.text.build()})
    }
}

/// Horizontal rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Divider;

impl Module for Divider {
    fn build(&self) -> Value {
        json!({"type": "divider"})
    }
}
