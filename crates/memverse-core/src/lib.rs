//! memverse-core — Scripture reference parsing and word-masking sessions.
//!
//! This crate holds the memorization engine: a reference parser, a session
//! that hides one random word at a time, and a TOML passage library that
//! drivers can start sessions from.

pub mod error;
pub mod library;
pub mod model;
pub mod reference;
pub mod session;
pub mod source;

pub use error::ParseError;
pub use reference::Reference;
pub use session::{MaskOutcome, Session, SessionState, Word};
pub use source::{IndexSource, ScriptedIndices};
