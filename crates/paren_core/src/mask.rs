//! Balance mask computation.
//!
//! The mask holds one running balance per input character: element `i` is
//! the initial balance plus the number of `(` minus the number of `)` in the
//! first `i + 1` characters.
//!
//! [`Balances`] produces the mask lazily and stops at the first character
//! outside the alphabet. [`balance_mask`] and [`balance_mask_from`] collect it
//! eagerly, discarding everything produced before an error.

use std::iter::FusedIterator;
use std::str::CharIndices;

use tracing::trace;

use crate::{Bracket, InvalidCharacterError};

/// Lazy iterator over the running balances of a sequence.
///
/// Yields `Ok(balance)` for each bracket and a single `Err` for the first
/// character outside the alphabet, after which it is exhausted.
#[derive(Clone, Debug)]
pub struct Balances<'a> {
    chars: CharIndices<'a>,
    balance: i64,
    failed: bool,
}

impl<'a> Balances<'a> {
    /// Iterate the balances of `sequence` starting from zero.
    pub fn new(sequence: &'a str) -> Self {
        Self::with_initial(sequence, 0)
    }

    /// Iterate the balances of `sequence` starting from `initial`.
    ///
    /// Passing the last balance of a prefix continues the mask of the
    /// concatenated sequence.
    pub fn with_initial(sequence: &'a str, initial: i64) -> Self {
        Self {
            chars: sequence.char_indices(),
            balance: initial,
            failed: false,
        }
    }

    /// The running balance after the characters consumed so far.
    #[inline]
    pub fn balance(&self) -> i64 {
        self.balance
    }
}

impl Iterator for Balances<'_> {
    type Item = Result<i64, InvalidCharacterError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        // Only single-byte brackets precede the first rejected character,
        // so the byte offset doubles as the character index.
        let (index, c) = self.chars.next()?;

        match Bracket::from_char(c) {
            Some(bracket) => {
                self.balance = self.balance.saturating_add(bracket.delta());
                Some(Ok(self.balance))
            }
            None => {
                trace!(found = ?c, index, "rejecting character outside bracket alphabet");
                self.failed = true;
                Some(Err(InvalidCharacterError::new(c, index)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // An invalid character ends iteration early, so only one more
            // item is guaranteed while input remains.
            let (lower, upper) = self.chars.size_hint();
            (lower.min(1), upper)
        }
    }
}

impl FusedIterator for Balances<'_> {}

/// Compute the balance mask of `sequence` starting from zero.
pub fn balance_mask(sequence: &str) -> Result<Vec<i64>, InvalidCharacterError> {
    balance_mask_from(sequence, 0)
}

/// Compute the balance mask of `sequence` starting from `initial`.
///
/// Fails with the first invalid character; no partial mask is returned.
pub fn balance_mask_from(sequence: &str, initial: i64) -> Result<Vec<i64>, InvalidCharacterError> {
    Balances::with_initial(sequence, initial).collect()
}

#[cfg(test)]
mod tests;
