//! Error types for card construction and emission.

use thiserror::Error;

/// Errors raised while building or emitting cards.
///
/// Attribute errors are always raised before any state is overwritten, so
/// a failed setter leaves the card exactly as it was.
#[derive(Debug, Error)]
pub enum CardError {
    /// An attribute was given an input of an unsupported shape.
    #[error("incorrect {attribute} value: {value}")]
    InvalidAttribute {
        /// Attribute name (`color`, `theme`, `size`).
        attribute: &'static str,
        /// The offending input, rendered as JSON text.
        value: String,
    },

    /// Ordinal access outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A color literal could not be parsed as `#rrggbb`.
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),

    /// JSON text emission failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CardError {
    /// Returns true for [`CardError::InvalidAttribute`].
    #[must_use]
    pub fn is_invalid_attribute(&self) -> bool {
        matches!(self, CardError::InvalidAttribute { .. })
    }

    /// Returns true for [`CardError::IndexOutOfRange`].
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, CardError::IndexOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
