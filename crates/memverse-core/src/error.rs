//! Reference parse errors.
//!
//! A malformed citation is fatal to session construction, so the parser
//! reports exactly what was wrong instead of falling back to defaults.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when parsing a scripture reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The reference has no `:` between the book and the verses.
    #[error("missing ':' between book and verses in reference '{input}'")]
    MissingSeparator { input: String },

    /// A verse segment is not a valid non-negative integer.
    #[error("invalid verse number '{segment}'")]
    InvalidVerse {
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// The verse part has more than one `-`.
    #[error("invalid verse range '{input}', expected 'n' or 'n-m'")]
    InvalidRange { input: String },

    /// The range ends before it starts.
    #[error("verse range {start}-{end} ends before it starts")]
    ReversedRange { start: u32, end: u32 },
}
