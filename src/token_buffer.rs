//! Module with the token buffer.
//!
//! The token buffer is the flat, append-only record the scanner writes its tokens to.
//! It has a cursor pointing at the current token. All setters and getters operate on the token
//! under the cursor. A single saved cursor slot allows the scanner to look one token back and
//! return afterwards.

use crate::{SourceBuffer, Token, TokenKind};

/// The number of tokens the buffer grows by when it is full.
const GROW_BY: usize = 256;

/// A growable buffer of tokens with a movable cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    // The index of the current token.
    cursor: usize,
    // The saved cursor.
    marked: usize,
}

impl TokenBuffer {
    /// Create a new, empty token buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new token and makes it the current token.
    pub fn append(&mut self) {
        if self.tokens.len() == self.tokens.capacity() {
            self.tokens.reserve_exact(GROW_BY);
        }
        self.tokens.push(Token::default());
        self.cursor = self.tokens.len() - 1;
    }

    /// Set the kind of the current token.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    #[inline]
    pub fn set_kind(&mut self, kind: TokenKind) {
        self.tokens[self.cursor].set_kind(kind);
    }

    /// Set the start offset of the current token.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    #[inline]
    pub fn set_start(&mut self, start: usize) {
        self.tokens[self.cursor].set_start(start);
    }

    /// Set the end offset of the current token.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    #[inline]
    pub fn set_end(&mut self, end: usize) {
        self.tokens[self.cursor].set_end(end);
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Get the kind of the current token, [`TokenKind::Unassigned`] if the buffer is empty.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.current().map_or(TokenKind::Unassigned, Token::kind)
    }

    /// Get the start offset of the current token, 0 if the buffer is empty.
    #[inline]
    pub fn start(&self) -> usize {
        self.current().map_or(0, Token::start)
    }

    /// Get the end offset of the current token, 0 if the buffer is empty.
    #[inline]
    pub fn end(&self) -> usize {
        self.current().map_or(0, Token::end)
    }

    /// Moves the cursor to the next token.
    /// Returns false if the cursor already is at the last token.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Moves the cursor to the previous token.
    /// Returns false if the cursor already is at the first token.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Saves the cursor. Only one cursor can be saved at a time.
    #[inline]
    pub fn mark(&mut self) {
        self.marked = self.cursor;
    }

    /// Restores the cursor saved with [`TokenBuffer::mark`].
    #[inline]
    pub fn restore(&mut self) {
        self.cursor = self.marked;
    }

    /// Moves the cursor to the first token.
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// The index of the current token.
    #[inline]
    pub fn token_index(&self) -> usize {
        self.cursor
    }

    /// The number of tokens in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the buffer holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get all tokens.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get the token at the given index.
    #[inline]
    pub fn token_at(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Returns an iterator over all tokens, independent of the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Get the text of the current token.
    pub fn token_text<'s>(&self, source: &SourceBuffer<'s>) -> std::borrow::Cow<'s, str> {
        source.text(self.start(), self.end())
    }

    /// Writes each token with its text to the log. Used for debugging purposes.
    pub fn log_contents(&self, source: &SourceBuffer) {
        for token in &self.tokens {
            log::debug!(
                "[{}] {}",
                token.kind().code(),
                source.text(token.start(), token.end())
            );
        }
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the labels of all tokens, e.g. `[typ][ide][ass][num];`.
impl std::fmt::Display for TokenBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.kind())?;
        }
        Ok(())
    }
}
