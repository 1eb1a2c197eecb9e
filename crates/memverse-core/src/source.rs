//! Random index sources consumed by [`Session::mask_next_word`].
//!
//! Every [`rand::Rng`] is an index source, so callers pass `thread_rng()` or
//! a seeded generator. [`ScriptedIndices`] replays a fixed sequence for
//! tests that need to control exactly which word is picked.
//!
//! [`Session::mask_next_word`]: crate::session::Session::mask_next_word

use rand::Rng;

/// A source of uniform random indices.
pub trait IndexSource {
    /// Return an index in `[0, upper)`. Callers never pass `upper == 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Values at or above `upper` wrap modulo `upper`.
#[derive(Debug, Clone)]
pub struct ScriptedIndices {
    indices: Vec<usize>,
    position: usize,
}

impl ScriptedIndices {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            position: 0,
        }
    }

    /// Number of indices handed out so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() {
            self.position += 1;
            return 0;
        }
        let value = self.indices[self.position % self.indices.len()];
        self.position += 1;
        value % upper
    }
}
