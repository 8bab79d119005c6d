#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TokenKind;

/// A token in the source buffer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The kind of the token.
    kind: TokenKind,
    /// The start offset of the token, inclusive.
    start: usize,
    /// The end offset of the token, exclusive.
    end: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token start must not exceed its end");
        Self { kind, start, end }
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the start of the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the byte range of the token.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Get the length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the token is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub(crate) fn set_kind(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    pub(crate) fn set_start(&mut self, start: usize) {
        self.start = start;
    }

    pub(crate) fn set_end(&mut self, end: usize) {
        self.end = end;
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}..{}", self.kind, self.start, self.end)
    }
}
