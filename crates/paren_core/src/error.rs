//! Analysis error type.

use thiserror::Error;

/// A character outside the `(` / `)` alphabet was found in the input.
///
/// Every character before the rejected one is a single-byte bracket, so
/// `index` is both the character position and the byte offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("invalid character {found:?} at index {index}: expected '(' or ')'")]
pub struct InvalidCharacterError {
    /// The rejected character.
    pub found: char,
    /// Zero-based position of the character.
    pub index: usize,
}

impl InvalidCharacterError {
    pub(crate) fn new(found: char, index: usize) -> Self {
        Self { found, index }
    }
}
