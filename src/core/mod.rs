//! Core types shared by every card component: errors and configuration.

pub mod config;
pub mod error;

pub use config::{CardConfig, RenderConfig};
pub use error::{CardError, Result};
