//! Text elements used inside modules.

use serde_json::{json, Value};

/// A text element, either plain or KMarkdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Text {
    Plain(String),
    KMarkdown(String),
}

impl Text {
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Text::Plain(content.into())
    }

    #[must_use]
    pub fn kmarkdown(content: impl Into<String>) -> Self {
        Text::KMarkdown(content.into())
    }

    /// Element type tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Text::Plain(_) => "plain-text",
            Text::KMarkdown(_) => "kmarkdown",
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Text::Plain(s) | Text::KMarkdown(s) => s,
        }
    }

    #[must_use]
    pub fn build(&self) -> Value {
        json!({"type": self.kind(), "content": self.content()})
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::plain(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::Plain(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let text = Text::plain("hello");
        assert_eq!(text.build(), json!({"type": "plain-text", "content": "hello"}));
    }

    #[test]
    fn test_kmarkdown_text() {
        let text = Text::kmarkdown("**bold**");
        assert_eq!(text.kind(), "kmarkdown");
        assert_eq!(text.content(), "**bold**");
        assert_eq!(text.build(), json!({"type": "kmarkdown", "content": "**bold**"}));
    }

    #[test]
    fn test_from_str_is_plain() {
        assert_eq!(Text::from("x"), Text::Plain("x".to_string()));
    }
}
