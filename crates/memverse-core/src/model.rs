//! Passage library data model.
//!
//! A library is a named collection of passages stored as TOML so a drill
//! can be started by id instead of retyping the text.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::reference::{self, Reference};
use crate::session::Session;

/// A stored passage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// Unique identifier within the library.
    pub id: String,
    /// Citation as typed, e.g. "Moroni 10:4-5".
    pub reference: String,
    /// The passage text.
    pub text: String,
    /// Tags for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Passage {
    /// Parse the stored citation.
    pub fn parsed_reference(&self) -> Result<Reference, ParseError> {
        reference::parse(&self.reference)
    }

    /// Start a masking session over this passage.
    pub fn session(&self) -> Result<Session, ParseError> {
        Session::new(&self.reference, &self.text)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A collection of passages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageLibrary {
    /// Unique identifier for this library.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub passages: Vec<Passage>,
}

impl PassageLibrary {
    /// Look up a passage by id.
    pub fn find(&self, id: &str) -> Option<&Passage> {
        self.passages.iter().find(|p| p.id == id)
    }
}
