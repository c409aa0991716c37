//! Card messages.
//!
//! The chat platform accepts cards as a JSON array: one message can carry
//! several cards stacked vertically.

use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use super::card::Card;
use super::render::to_json_text;
use crate::core::config::RenderConfig;
use crate::core::error::{CardError, Result};

/// An ordered list of cards sent as one message.
#[derive(Debug, Default)]
pub struct CardMessage {
    cards: Vec<Card>,
}

impl CardMessage {
    /// Create an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of the message.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Get the card at `index`.
    pub fn get(&self, index: usize) -> Result<&Card> {
        self.cards.get(index).ok_or(CardError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Get the card at `index` for modification.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Card> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or(CardError::IndexOutOfRange { index, len })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the message has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Iterate over cards in message order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Build the message document: an array of card documents, in order.
    #[must_use]
    pub fn build(&self) -> Value {
        trace!(cards = self.cards.len(), "building card message");
        Value::Array(self.cards.iter().map(Card::build).collect())
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

impl From<Card> for CardMessage {
    fn from(card: Card) -> Self {
        Self { cards: vec![card] }
    }
}

impl FromIterator<Card> for CardMessage {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardMessage {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl Serialize for CardMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}
