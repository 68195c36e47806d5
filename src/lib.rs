//! Minimal cut set enumeration over a layered AND/OR Boolean graph (MOCUS).
//!
//! The entry point is [`mocus::Mocus`]: build one from anything implementing
//! [`graph::boolean::BooleanGraph`] and call `analyze()`.

pub mod cut_set;
pub mod error;
pub mod graph;
pub mod literal;
pub mod minimize;
pub mod mocus;
pub mod settings;

pub use cut_set::CutSet;
pub use error::{Error, Result};
pub use mocus::Mocus;
pub use settings::Settings;
