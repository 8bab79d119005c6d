use std::sync::Arc;

use log::{debug, trace};

use crate::{
    Dictionary, HlError, HlErrorKind, LanguageDictionary, NonAsciiPolicy, Result, ScannerConfig,
    SourceBuffer, TokenBuffer, TokenKind, REST_OF_INPUT,
};

use super::{
    byte_class::{
        is_all_caps, is_binary_continue, is_binary_digit, is_boolean_literal, is_digit,
        is_float_suffix, is_hex_continue, is_hex_digit, is_identifier_continue,
        is_number_continue, ByteCategory,
    },
    ScanState,
};

/// ScannerImpl instances are created by the ScannerBuilder.
#[derive(Debug, Clone)]
pub(crate) struct ScannerImpl {
    pub(crate) dictionary: Arc<LanguageDictionary>,
    pub(crate) config: ScannerConfig,
}

impl ScannerImpl {
    pub(crate) fn new(dictionary: Arc<LanguageDictionary>, config: ScannerConfig) -> Self {
        Self { dictionary, config }
    }

    pub(crate) fn tokenize(&self, source: &SourceBuffer) -> Result<TokenBuffer> {
        tokenize_with(
            source,
            self.dictionary.keywords(),
            self.dictionary.datatypes(),
            self.config,
        )
    }
}

/// Runs the state machine over the whole source.
pub(crate) fn tokenize_with(
    source: &SourceBuffer,
    keywords: &dyn Dictionary,
    datatypes: &dyn Dictionary,
    config: ScannerConfig,
) -> Result<TokenBuffer> {
    if source.len() > REST_OF_INPUT {
        return Err(HlError::new(HlErrorKind::SourceTooLarge(source.len())));
    }
    let mut run = ScanRun {
        source: source.as_bytes(),
        keywords,
        datatypes,
        opaque_non_ascii: config.non_ascii == NonAsciiPolicy::Opaque,
        tokens: TokenBuffer::new(),
        index: 0,
    };
    let mut state = ScanState::NextToken;
    while state != ScanState::Done {
        state = run.step(state)?;
    }
    debug!(
        "Scanned {} tokens from {} bytes",
        run.tokens.len(),
        source.len()
    );
    Ok(run.tokens)
}

/// The mutable state of one pass over a source.
struct ScanRun<'s, 'd> {
    source: &'s [u8],
    keywords: &'d dyn Dictionary,
    datatypes: &'d dyn Dictionary,
    opaque_non_ascii: bool,
    tokens: TokenBuffer,
    // The offset of the byte under inspection.
    index: usize,
}

impl ScanRun<'_, '_> {
    #[inline]
    fn current(&self) -> Option<u8> {
        self.source.get(self.index).copied()
    }

    /// The last consumed byte. Only valid once the current token consumed a byte.
    #[inline]
    fn previous(&self) -> u8 {
        self.source[self.index - 1]
    }

    #[inline]
    fn consume_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&predicate) {
            self.index += 1;
        }
    }

    /// A literal must not end with `_`. The underscore is left for the next token.
    #[inline]
    fn give_back_underscore(&mut self) -> bool {
        if self.previous() == b'_' {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Consumes the operator's first byte and, if the next byte is one of the continuations,
    /// that byte too. Returns the kind of the matched continuation.
    fn operator(&mut self, continuations: &[(u8, TokenKind)]) -> Option<TokenKind> {
        self.index += 1;
        let next = self.current()?;
        let (_, kind) = continuations.iter().find(|(byte, _)| *byte == next)?;
        self.tokens.set_kind(*kind);
        self.index += 1;
        Some(*kind)
    }

    /// After `<<` or `>>`: an optional third arrow, then an optional `=` for an assignment.
    fn shift_tail(&mut self, arrow: u8) {
        if self.current() == Some(arrow) {
            self.index += 1;
        }
        if self.current() == Some(b'=') {
            self.tokens.set_kind(TokenKind::Assignment);
            self.index += 1;
        }
    }

    fn step(&mut self, state: ScanState) -> Result<ScanState> {
        let next = match state {
            ScanState::NextToken => return self.next_token(),
            ScanState::Letters => self.letters(),
            ScanState::Identifier => self.identifier(),
            ScanState::Numerals => self.numerals(),
            ScanState::Decimal => self.decimal(),
            ScanState::Hexadecimal => self.radix(TokenKind::Hexadecimal, is_hex_digit, is_hex_continue),
            ScanState::Binary => self.radix(TokenKind::Binary, is_binary_digit, is_binary_continue),
            ScanState::Exponential => self.exponential(),
            ScanState::SymbolsA => self.symbols_a(),
            ScanState::SymbolsB => self.symbols_b(),
            ScanState::SymbolsC => self.symbols_c(),
            ScanState::SymbolsD => self.symbols_d(),
            ScanState::String => self.quoted(b'"', TokenKind::String),
            ScanState::Char => self.quoted(b'\'', TokenKind::Char),
            ScanState::LineComment => self.line_comment(),
            ScanState::BlockComment => self.block_comment(),
            ScanState::Done => ScanState::Done,
        };
        Ok(next)
    }

    fn next_token(&mut self) -> Result<ScanState> {
        if !self.tokens.is_empty() {
            self.tokens.set_end(self.index);
            if let Some(token) = self.tokens.current() {
                trace!("Token {}", token);
            }
        }
        let next = loop {
            let Some(byte) = self.current() else {
                return Ok(ScanState::Done);
            };
            break match ByteCategory::of(byte) {
                ByteCategory::Whitespace => {
                    self.index += 1;
                    continue;
                }
                ByteCategory::IdentifierStart => ScanState::Letters,
                ByteCategory::Digit => ScanState::Numerals,
                ByteCategory::SymbolsA => ScanState::SymbolsA,
                ByteCategory::SymbolsB => ScanState::SymbolsB,
                ByteCategory::SymbolsC => ScanState::SymbolsC,
                ByteCategory::SymbolsD => ScanState::SymbolsD,
                ByteCategory::NonAscii if self.opaque_non_ascii => ScanState::Letters,
                ByteCategory::NonAscii => {
                    return Err(HlError::new(HlErrorKind::NonAsciiByte {
                        byte,
                        offset: self.index,
                    }));
                }
            };
        };
        self.tokens.append();
        self.tokens.set_start(self.index);
        Ok(next)
    }

    fn letters(&mut self) -> ScanState {
        self.tokens.set_kind(TokenKind::Identifier);
        self.index += 1;
        let opaque = self.opaque_non_ascii;
        self.consume_while(|b| is_identifier_continue(b) || (opaque && !b.is_ascii()));
        if self.previous() == b'.' {
            self.index -= 1;
        }
        ScanState::Identifier
    }

    fn identifier(&mut self) -> ScanState {
        let start = self.tokens.start();
        let end = self.index;
        if self.datatypes.contains_word(self.source, start, end) {
            self.tokens.set_kind(TokenKind::Datatype);
        } else if self.keywords.contains_word(self.source, start, end) {
            self.tokens.set_kind(TokenKind::Keyword);
        } else if is_boolean_literal(&self.source[start..end]) {
            self.tokens.set_kind(TokenKind::Boolean);
        } else {
            // An identifier right after a bare `@` or `#` is an annotation or directive.
            self.tokens.mark();
            if self.tokens.retreat()
                && matches!(self.tokens.kind(), TokenKind::AtSign | TokenKind::HashSign)
            {
                self.tokens.set_kind(TokenKind::Special);
                self.tokens.restore();
                self.tokens.set_kind(TokenKind::Special);
            } else {
                self.tokens.restore();
            }
            if self.tokens.kind() != TokenKind::Special && is_all_caps(&self.source[start..end])
            {
                self.tokens.set_kind(TokenKind::Special);
            }
        }
        ScanState::NextToken
    }

    fn numerals(&mut self) -> ScanState {
        self.tokens.set_kind(TokenKind::IntegerDecimal);
        loop {
            self.index += 1;
            let Some(byte) = self.current() else {
                break;
            };
            if is_number_continue(byte) {
                continue;
            }
            let previous = self.previous();
            match byte {
                b'.' => return ScanState::Decimal,
                b'x' | b'X' | b'b' | b'B' => {
                    // Only a solitary leading zero introduces a radix prefix.
                    if previous == b'0' && self.index - self.tokens.start() == 1 {
                        return if byte.eq_ignore_ascii_case(&b'x') {
                            ScanState::Hexadecimal
                        } else {
                            ScanState::Binary
                        };
                    }
                    break;
                }
                b'e' | b'E' if previous != b'_' => return ScanState::Exponential,
                _ => break,
            }
        }
        ScanState::NextToken
    }

    fn decimal(&mut self) -> ScanState {
        self.tokens.set_kind(TokenKind::FloatingPoint);
        self.index += 1;
        if self.current().is_some_and(is_digit) {
            self.consume_while(is_number_continue);
            self.give_back_underscore();
        }
        if self.current().is_some_and(is_float_suffix) {
            self.index += 1;
        }
        ScanState::NextToken
    }

    /// Hexadecimal and binary literals after their `0x` or `0b` prefix.
    fn radix(
        &mut self,
        kind: TokenKind,
        is_start: fn(u8) -> bool,
        is_continue: fn(u8) -> bool,
    ) -> ScanState {
        self.tokens.set_kind(kind);
        self.index += 1;
        if self.current().is_some_and(is_start) {
            self.consume_while(is_continue);
            self.give_back_underscore();
        }
        if self.current() == Some(b'L') {
            self.index += 1;
        }
        ScanState::NextToken
    }

    fn exponential(&mut self) -> ScanState {
        self.tokens.set_kind(TokenKind::Exponential);
        self.index += 1;
        if matches!(self.current(), Some(b'+' | b'-')) {
            self.index += 1;
        }
        if self.current().is_some_and(is_digit) {
            self.consume_while(is_number_continue);
            if !self.give_back_underscore() && self.current().is_some_and(is_float_suffix) {
                self.index += 1;
            }
        }
        ScanState::NextToken
    }

    /// ``! " # $ % & ' ( ) * + , - . /``
    fn symbols_a(&mut self) -> ScanState {
        let byte = self.source[self.index];
        self.tokens.set_kind(TokenKind::from_symbol(byte));
        match byte {
            b'"' => return ScanState::String,
            b'\'' => return ScanState::Char,
            b'/' => {
                self.index += 1;
                match self.current() {
                    Some(b'*') => return ScanState::BlockComment,
                    Some(b'/') => return ScanState::LineComment,
                    Some(b'=') => {
                        self.tokens.set_kind(TokenKind::Assignment);
                        self.index += 1;
                    }
                    _ => (),
                }
            }
            b'!' => {
                self.operator(&[(b'=', TokenKind::Equality)]);
            }
            b'%' | b'*' => {
                self.operator(&[(b'=', TokenKind::Assignment)]);
            }
            b'&' => {
                self.operator(&[
                    (b'=', TokenKind::Assignment),
                    (b'&', TokenKind::LogicalAnd),
                ]);
            }
            b'+' => {
                self.operator(&[(b'=', TokenKind::Assignment), (b'+', TokenKind::Increment)]);
            }
            b'-' => {
                self.operator(&[(b'=', TokenKind::Assignment), (b'-', TokenKind::Decrement)]);
            }
            b'(' => {
                self.operator(&[(b')', TokenKind::OpenCloseParen)]);
            }
            _ => self.index += 1,
        }
        ScanState::NextToken
    }

    /// `: ; < = > ? @`
    fn symbols_b(&mut self) -> ScanState {
        let byte = self.source[self.index];
        self.tokens.set_kind(TokenKind::from_symbol(byte));
        match byte {
            b'<' => {
                let matched = self.operator(&[
                    (b'<', TokenKind::Shift),
                    (b'=', TokenKind::LesserEquals),
                    (b'>', TokenKind::OpenCloseAngle),
                ]);
                if matched == Some(TokenKind::Shift) {
                    self.shift_tail(b'<');
                }
            }
            b'=' => {
                self.tokens.set_kind(TokenKind::Assignment);
                self.operator(&[(b'=', TokenKind::Equality)]);
            }
            b'>' => {
                let matched = self.operator(&[
                    (b'>', TokenKind::Shift),
                    (b'=', TokenKind::GreaterEquals),
                ]);
                if matched == Some(TokenKind::Shift) {
                    self.shift_tail(b'>');
                }
            }
            _ => self.index += 1,
        }
        ScanState::NextToken
    }

    /// ``[ \ ] ^ ` ``
    fn symbols_c(&mut self) -> ScanState {
        let byte = self.source[self.index];
        self.tokens.set_kind(TokenKind::from_symbol(byte));
        match byte {
            b'[' => {
                self.operator(&[(b']', TokenKind::OpenCloseSquare)]);
            }
            b'^' => {
                self.operator(&[(b'=', TokenKind::Assignment)]);
            }
            _ => self.index += 1,
        }
        ScanState::NextToken
    }

    /// `{ | } ~` and DEL, which stays unassigned.
    fn symbols_d(&mut self) -> ScanState {
        let byte = self.source[self.index];
        self.tokens.set_kind(TokenKind::from_symbol(byte));
        if byte == b'|' {
            self.operator(&[(b'=', TokenKind::Assignment), (b'|', TokenKind::LogicalOr)]);
        } else {
            self.index += 1;
        }
        ScanState::NextToken
    }

    /// Consumes up to and including the closing delimiter, or up to the end of the line.
    /// A backslash escapes the byte after it unless that byte ends the line.
    fn quoted(&mut self, delimiter: u8, kind: TokenKind) -> ScanState {
        self.tokens.set_kind(kind);
        self.index += 1;
        while let Some(byte) = self.current() {
            match byte {
                b'\n' => break,
                b'\\' => {
                    self.index += 1;
                    if self.current().is_some_and(|b| b != b'\n') {
                        self.index += 1;
                    }
                }
                _ if byte == delimiter => {
                    self.index += 1;
                    break;
                }
                _ => self.index += 1,
            }
        }
        ScanState::NextToken
    }

    /// Entered on the second `/`. The newline is not part of the comment.
    fn line_comment(&mut self) -> ScanState {
        self.tokens.set_kind(TokenKind::Comment);
        self.index += 1;
        self.consume_while(|b| b != b'\n');
        ScanState::NextToken
    }

    /// Entered on the `*` of `/*`. Unterminated comments run to the end of the input.
    fn block_comment(&mut self) -> ScanState {
        self.tokens.set_kind(TokenKind::Comment);
        self.index += 1;
        while let Some(byte) = self.current() {
            if byte == b'*' && self.source.get(self.index + 1) == Some(&b'/') {
                self.index += 2;
                break;
            }
            self.index += 1;
        }
        ScanState::NextToken
    }
}
