//! Append-only history of consumed characters with suffix queries.
//!
//! The filter never looks ahead. Multi-character tokens are detected by
//! asking, after each character, whether everything consumed so far ends
//! with the token. [`Trail`] answers that without rescanning: it walks the
//! token and its own tail back to front and stops at the first mismatch.

use alloc::vec::Vec;

/// Every character consumed so far, in order.
///
/// Grows for the whole pass; a suffix query costs at most the token length.
#[derive(Debug, Default)]
pub(crate) struct Trail {
    chars: Vec<char>,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
        }
    }

    /// Records one consumed character.
    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Does the history end with `token`?
    ///
    /// False when fewer characters than `token` holds have been consumed;
    /// the empty token matches vacuously.
    pub fn ends_with(&self, token: &str) -> bool {
        let mut history = self.chars.iter().rev();
        for expected in token.chars().rev() {
            match history.next() {
                Some(&seen) if seen == expected => {}
                _ => return false,
            }
        }
        true
    }

    /// Does the history end with any of `tokens`?
    ///
    /// Tried in slice order, short-circuiting on the first match.
    pub fn ends_with_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|token| self.ends_with(token))
    }
}
