//! Cards and card messages.
//!
//! ## Key Types
//!
//! - `Card`: one card document (theme, size, color, ordered modules)
//! - `CardMessage`: the ordered list of cards sent as one chat message

pub mod card;
pub mod message;
mod render;

pub use card::Card;
pub use message::CardMessage;
