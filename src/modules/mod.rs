//! Card modules: the visual blocks inside a card.
//!
//! Every module type implements [`Module`], whose only job is to produce
//! its own JSON document. Cards hold modules as trait objects and never
//! look inside them.
//!
//! ## Provided Modules
//!
//! - `Header`: a plain-text title line
//! - `Section`: a text block
//! - `Divider`: a horizontal rule
//!
//! A `serde_json::Value` is itself a module, for documents built elsewhere.

pub mod basic;
pub mod text;

pub use basic::{Divider, Header, Section};
pub use text::Text;

use serde_json::Value;

/// A block that can render itself as a card module document.
///
/// `build` must be pure: cards call it on every `Card::build`.
pub trait Module: std::fmt::Debug {
    fn build(&self) -> Value;
}

impl Module for Value {
    fn build(&self) -> Value {
        self.clone()
    }
}

impl<M: Module + ?Sized> Module for Box<M> {
    fn build(&self) -> Value {
        (**self).build()
    }
}
