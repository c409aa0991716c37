//! Card document tests.
//!
//! These tests exercise the public card API end to end:
//! - Module ordering under append/clear
//! - Attribute normalization and the `color` key rule
//! - Error behavior for bad indices and bad attribute inputs

use khl_card::attributes::{Color, NamedColor, Size, Theme};
use khl_card::cards::{Card, CardMessage};
use khl_card::core::{CardConfig, CardError, RenderConfig};
use khl_card::modules::{Divider, Header, Module, Section, Text};
use serde_json::{json, Value};

/// A module that renders a fixed tag.
#[derive(Debug)]
struct Tagged(&'static str);

impl Module for Tagged {
    fn build(&self) -> Value {
        json!({"type": "tagged", "tag": self.0})
    }
}

fn tags(doc: &Value) -> Vec<String> {
    doc["modules"]
        .as_array()
        .expect("modules should be an array")
        .iter()
        .map(|m| m["tag"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Test that construction order is document order.
#[test]
fn test_modules_keep_construction_order() {
    let card = Card::with_modules(vec![
        Box::new(Tagged("A")) as Box<dyn Module>,
        Box::new(Tagged("B")),
        Box::new(Tagged("C")),
    ]);

    assert_eq!(tags(&card.build()), vec!["A", "B", "C"]);
}

/// Test that clear empties the module list and append starts over.
#[test]
fn test_clear_then_append() {
    let mut card = Card::with_modules(vec![
        Box::new(Tagged("A")) as Box<dyn Module>,
        Box::new(Tagged("B")),
    ]);
    card.clear();
    assert_eq!(card.build()["modules"], json!([]));

    card.append(Tagged("C"));
    assert_eq!(tags(&card.build()), vec!["C"]);
}

/// Test the full document for a typical notification card.
#[test]
fn test_full_document() {
    let mut card = Card::new()
        .with_theme(Theme::Warning)
        .with_size(Size::Sm)
        .with_color(Color::rgb(0xff, 0xaa, 0x00))
        .expect("color should be accepted");
    card.append(Header::new("Disk usage"));
    card.append(Divider);
    card.append(Section::new(Text::kmarkdown("`/var` is at **91%**")));

    assert_eq!(
        card.build(),
        json!({
            "type": "card",
            "theme": "warning",
            "size": "sm",
            "color": "#ffaa00",
            "modules": [
                {"type": "header", "text": {"type": "plain-text", "content": "Disk usage"}},
                {"type": "divider"},
                {"type": "section", "text": {"type": "kmarkdown", "content": "`/var` is at **91%**"}}
            ]
        })
    );
}

/// Test that build is repeatable and does not mutate the card.
#[test]
fn test_build_is_idempotent() {
    let mut card = Card::new().with_color(NamedColor::Aqua).unwrap();
    card.append(Header::new("x"));
    card.append(json!({"type": "raw"}));

    let first = card.build();
    let second = card.build();
    assert_eq!(first, second);
    assert_eq!(card.len(), 2);
}

/// Test the color key presence rule.
#[test]
fn test_color_key_presence() {
    let mut card = Card::new();
    card.set_color("#55ffff").unwrap();
    assert_eq!(card.build()["color"], "#55ffff");

    card.set_color(Value::Null).unwrap();
    assert!(card.build().as_object().unwrap().get("color").is_none());

    card.set_color(NamedColor::Aqua).unwrap();
    assert_eq!(card.build()["color"], "#55ffff");

    card.set_color(None::<&str>).unwrap();
    assert!(card.color().is_none());
}

/// Test that a rejected color leaves the previous one in place.
#[test]
fn test_rejected_color_is_atomic() {
    let mut card = Card::new().with_color("#010101").unwrap();

    let err = card.set_color(json!(3.5)).unwrap_err();
    match err {
        CardError::InvalidAttribute { attribute, value } => {
            assert_eq!(attribute, "color");
            assert_eq!(value, "3.5");
        }
        other => panic!("Expected InvalidAttribute, got {other:?}"),
    }
    assert_eq!(card.color(), Some("#010101"));
    assert_eq!(card.build()["color"], "#010101");
}

/// Test that enum members are stored as their string values.
#[test]
fn test_theme_enum_stored_as_string() {
    let mut card = Card::new();
    for theme in Theme::ALL {
        card.set_theme(theme);
        assert_eq!(card.build()["theme"], theme.as_str());
    }
    card.set_size(Size::Sm);
    assert_eq!(card.build()["size"], "sm");
}

/// Test ordinal access bounds.
#[test]
fn test_index_out_of_range() {
    let mut card = Card::new();
    card.append(Tagged("A"));
    card.append(Tagged("B"));

    assert_eq!(card.get(0).unwrap().build()["tag"], "A");
    let err = card.get(5).unwrap_err();
    assert!(err.is_index_out_of_range());
    assert_eq!(err.to_string(), "index 5 out of range for length 2");
}

/// Test JSON text round-trips to the same document.
#[test]
fn test_json_text_matches_build() {
    let mut card = Card::from_config(&CardConfig::default().with_color("#ffffff"));
    card.append(Section::new("héllo wörld"));

    let pretty = card.build_to_json().unwrap();
    assert!(pretty.contains("héllo wörld"));
    assert_eq!(serde_json::from_str::<Value>(&pretty).unwrap(), card.build());

    let compact = card.build_to_json_with(&RenderConfig::compact()).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(serde_json::from_str::<Value>(&compact).unwrap(), card.build());
}

/// Test a multi-card message.
#[test]
fn test_card_message() {
    let mut first = Card::new();
    first.append(Header::new("one"));
    let mut second = Card::new().with_theme(Theme::Secondary);
    second.append(Divider);

    let mut message = CardMessage::from(first);
    message.push(second);

    let doc = message.build();
    assert_eq!(doc.as_array().unwrap().len(), 2);
    assert_eq!(doc[0]["modules"][0]["type"], "header");
    assert_eq!(doc[1]["theme"], "secondary");

    message.clear();
    assert_eq!(message.build(), json!([]));
}

/// Test optional JSON colors: `Some(null)` clears, `Some(number)` is rejected.
#[test]
fn test_optional_json_color() {
    let mut card = Card::new().with_color("#222222").unwrap();

    assert!(card.set_color(Some(json!(1))).unwrap_err().is_invalid_attribute());
    assert_eq!(card.color(), Some("#222222"));

    card.set_color(Some(Value::Null)).unwrap();
    assert!(card.color().is_none());
}

/// Test clearing the color removes the key from the document.
#[test]
fn test_clear_color_removes_key() {
    let mut card = Card::new().with_color(NamedColor::Gold).unwrap();
    card.clear_color();

    let doc = card.build();
    assert!(doc.get("color").is_none());
    assert_eq!(doc["theme"], "primary");
}

/// Test ordinal access on an empty card.
#[test]
fn test_get_on_empty_card() {
    let card = Card::new();
    let err = card.get(0).unwrap_err();
    assert!(matches!(err, CardError::IndexOutOfRange { index: 0, len: 0 }));
}
