//! The output side of the pass: an accumulator whose tail can be taken back.
//!
//! The filter appends every character before deciding its fate; marker text
//! and characters from dropped blocks are then removed by retracting the
//! tail. A retract amount is always the length of the token just matched or
//! the single character just appended, so the buffer is never asked to give
//! back more than it holds.

use alloc::{string::String, vec::Vec};

/// Characters that will form the transformed source, in order.
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    chars: Vec<char>,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
        }
    }

    /// Appends one character.
    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Removes the last `n` characters.
    ///
    /// Callers only ever retract characters appended earlier in the same
    /// pass; retracting more than the buffer holds is a bug upstream.
    pub fn retract(&mut self, n: usize) {
        debug_assert!(
            n <= self.chars.len(),
            "retract({n}) with only {} characters held",
            self.chars.len()
        );
        let keep = self.chars.len().saturating_sub(n);
        self.chars.truncate(keep);
    }

    /// The accumulated text.
    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}
