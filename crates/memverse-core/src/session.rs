//! Word-masking sessions.
//!
//! A [`Session`] owns a parsed [`Reference`] and the passage split into
//! [`Word`]s. Each call to [`Session::mask_next_word`] draws one index from
//! the whole word range. A draw that lands on an already hidden word is
//! wasted; there is no retry, so the last few words take longer and longer
//! to hit.

use std::fmt;

use crate::error::ParseError;
use crate::reference::{self, Reference};
use crate::source::IndexSource;

/// Rendered in place of a hidden word.
pub const MASK: &str = "____";

/// A single token of the passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    hidden: bool,
}

impl Word {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            hidden: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The text if visible, [`MASK`] otherwise.
    pub fn display(&self) -> &str {
        if self.hidden {
            MASK
        } else {
            &self.text
        }
    }
}

/// Whether any words remain to be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Complete,
}

/// What a single [`Session::mask_next_word`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskOutcome {
    /// The word at this index was visible and is now hidden.
    Hidden(usize),
    /// The draw landed on a word that was already hidden.
    AlreadyHidden(usize),
    /// Every word was already hidden; nothing was drawn.
    Complete,
}

impl MaskOutcome {
    /// Whether the call hid a word.
    pub fn made_progress(&self) -> bool {
        matches!(self, MaskOutcome::Hidden(_))
    }
}

/// A memorization session over one passage.
#[derive(Debug, Clone)]
pub struct Session {
    reference: Reference,
    words: Vec<Word>,
    hidden_count: usize,
}

impl Session {
    /// Parse `reference` and split `text` on whitespace.
    pub fn new(reference: &str, text: &str) -> Result<Self, ParseError> {
        let reference = reference::parse(reference)?;
        Ok(Self::from_parts(reference, text))
    }

    /// Build a session from an already parsed reference.
    pub fn from_parts(reference: Reference, text: &str) -> Self {
        let words: Vec<Word> = text.split_whitespace().map(Word::new).collect();
        tracing::debug!(
            reference = %reference,
            words = words.len(),
            "created masking session"
        );
        Self {
            reference,
            words,
            hidden_count: 0,
        }
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }

    pub fn visible_count(&self) -> usize {
        self.words.len() - self.hidden_count
    }

    pub fn is_complete(&self) -> bool {
        self.hidden_count == self.words.len()
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else {
            SessionState::Active
        }
    }

    /// Fraction of words hidden, in `[0.0, 1.0]`. An empty passage counts as done.
    pub fn progress(&self) -> f64 {
        if self.words.is_empty() {
            1.0
        } else {
            self.hidden_count as f64 / self.words.len() as f64
        }
    }

    /// Draw one index from the full word range and hide that word if visible.
    pub fn mask_next_word<S: IndexSource + ?Sized>(&mut self, source: &mut S) -> MaskOutcome {
        if self.is_complete() {
            return MaskOutcome::Complete;
        }

        let index = source.next_index(self.words.len());
        let word = &mut self.words[index];
        if word.hidden {
            tracing::trace!(index, "draw landed on a hidden word");
            return MaskOutcome::AlreadyHidden(index);
        }

        word.hidden = true;
        self.hidden_count += 1;
        tracing::trace!(index, hidden = self.hidden_count, "hid word");
        if self.is_complete() {
            tracing::debug!(reference = %self.reference, "all words hidden");
        }
        MaskOutcome::Hidden(index)
    }

    /// The passage line with hidden words masked, then the reference line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.words.is_empty() {
            for (i, word) in self.words.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(word.display())?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.reference)
    }
}
