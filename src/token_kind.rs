//! Module with the token kind taxonomy.
//!
//! Every token produced by the scanner carries a [`TokenKind`]. The kind determines the coarse
//! [`TokenClass`] of the token and the [`HighlightColor`] it is rendered with.
//!
//! The kinds with codes 0 to 25 are literals, identifiers and multi-character operators.
//! Single-character symbols use their ASCII code as kind code. They are resolved through a
//! constant table indexed by `code - 33` instead of being matched one by one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::HighlightColor;

/// The coarse class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenClass {
    /// The token has no class.
    None,
    /// Numeric and boolean literals.
    Primitive,
    /// Identifiers, keywords, datatypes and special identifiers.
    Identifier,
    /// Single- and multi-character operators and punctuation.
    Symbol,
    /// String and char literals.
    String,
    /// Line and block comments.
    Comment,
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// No kind assigned, also used for unknown codes.
    #[default]
    Unassigned = 0,
    /// Decimal integer literal, e.g. `1_000`.
    IntegerDecimal = 1,
    /// Hexadecimal literal, e.g. `0xFF`.
    Hexadecimal = 2,
    /// Binary literal, e.g. `0b1010`.
    Binary = 3,
    /// Floating point literal, e.g. `3.14f`.
    FloatingPoint = 4,
    /// Exponential literal, e.g. `1e-10`.
    Exponential = 5,
    /// `true` or `false`.
    Boolean = 6,
    /// Plain identifier.
    Identifier = 7,
    /// Language keyword.
    Keyword = 8,
    /// Built-in datatype.
    Datatype = 9,
    /// Annotation, preprocessor directive or all-caps identifier.
    Special = 10,
    /// Line or block comment.
    Comment = 11,
    /// String literal.
    String = 12,
    /// Char literal.
    Char = 13,
    /// `[]`
    OpenCloseSquare = 14,
    /// `()`
    OpenCloseParen = 15,
    /// `<>`
    OpenCloseAngle = 16,
    /// `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `&=`, `^=`, `|=`, `<<=`, `>>=`, `<<<=`, `>>>=`
    Assignment = 17,
    /// `<<`, `>>`, `<<<`, `>>>`
    Shift = 18,
    /// `==`, `!=`
    Equality = 19,
    /// `&&`
    LogicalAnd = 20,
    /// `||`
    LogicalOr = 21,
    /// `>=`
    GreaterEquals = 22,
    /// `<=`
    LesserEquals = 23,
    /// `++`
    Increment = 24,
    /// `--`
    Decrement = 25,
    /// `!`
    ExclamationMark = 33,
    /// `"`
    QuotationMark = 34,
    /// `#`
    HashSign = 35,
    /// `$`
    DollarSign = 36,
    /// `%`
    Percent = 37,
    /// `&`
    Ampersand = 38,
    /// `'`
    Apostrophe = 39,
    /// `(`
    OpenParen = 40,
    /// `)`
    CloseParen = 41,
    /// `*`
    Asterisk = 42,
    /// `+`
    Plus = 43,
    /// `,`
    Comma = 44,
    /// `-`
    Minus = 45,
    /// `.`
    Dot = 46,
    /// `/`
    Slash = 47,
    /// `:`
    Colon = 58,
    /// `;`
    Semicolon = 59,
    /// `<`
    LessThan = 60,
    /// `=` as part of no operator. The scanner emits [`TokenKind::Assignment`] for a lone `=`.
    Equals = 61,
    /// `>`
    GreaterThan = 62,
    /// `?`
    QuestionMark = 63,
    /// `@`
    AtSign = 64,
    /// `[`
    OpenSquare = 91,
    /// `\`
    Backslash = 92,
    /// `]`
    CloseSquare = 93,
    /// `^`
    Caret = 94,
    /// `_`
    Underscore = 95,
    /// `` ` ``
    GraveAccent = 96,
    /// `{`
    OpenCurly = 123,
    /// `|`
    VerticalBar = 124,
    /// `}`
    CloseCurly = 125,
    /// `~`
    Tilde = 126,
}

/// Kinds with codes 0 to 25, indexed by code.
const NAMED: [TokenKind; 26] = [
    TokenKind::Unassigned,
    TokenKind::IntegerDecimal,
    TokenKind::Hexadecimal,
    TokenKind::Binary,
    TokenKind::FloatingPoint,
    TokenKind::Exponential,
    TokenKind::Boolean,
    TokenKind::Identifier,
    TokenKind::Keyword,
    TokenKind::Datatype,
    TokenKind::Special,
    TokenKind::Comment,
    TokenKind::String,
    TokenKind::Char,
    TokenKind::OpenCloseSquare,
    TokenKind::OpenCloseParen,
    TokenKind::OpenCloseAngle,
    TokenKind::Assignment,
    TokenKind::Shift,
    TokenKind::Equality,
    TokenKind::LogicalAnd,
    TokenKind::LogicalOr,
    TokenKind::GreaterEquals,
    TokenKind::LesserEquals,
    TokenKind::Increment,
    TokenKind::Decrement,
];

/// The single-character symbol kinds in code order.
const SYMBOLS: [TokenKind; 32] = [
    TokenKind::ExclamationMark,
    TokenKind::QuotationMark,
    TokenKind::HashSign,
    TokenKind::DollarSign,
    TokenKind::Percent,
    TokenKind::Ampersand,
    TokenKind::Apostrophe,
    TokenKind::OpenParen,
    TokenKind::CloseParen,
    TokenKind::Asterisk,
    TokenKind::Plus,
    TokenKind::Comma,
    TokenKind::Minus,
    TokenKind::Dot,
    TokenKind::Slash,
    TokenKind::Colon,
    TokenKind::Semicolon,
    TokenKind::LessThan,
    TokenKind::Equals,
    TokenKind::GreaterThan,
    TokenKind::QuestionMark,
    TokenKind::AtSign,
    TokenKind::OpenSquare,
    TokenKind::Backslash,
    TokenKind::CloseSquare,
    TokenKind::Caret,
    TokenKind::Underscore,
    TokenKind::GraveAccent,
    TokenKind::OpenCurly,
    TokenKind::VerticalBar,
    TokenKind::CloseCurly,
    TokenKind::Tilde,
];

const FIRST_SYMBOL: u8 = 33;
const LAST_SYMBOL: u8 = 126;

/// Symbol kinds indexed by `code - FIRST_SYMBOL`. Digits and letters stay unassigned.
const SYMBOL_TABLE: [TokenKind; (LAST_SYMBOL - FIRST_SYMBOL + 1) as usize] = {
    let mut table = [TokenKind::Unassigned; (LAST_SYMBOL - FIRST_SYMBOL + 1) as usize];
    let mut i = 0;
    while i < SYMBOLS.len() {
        let kind = SYMBOLS[i];
        table[(kind as u8 - FIRST_SYMBOL) as usize] = kind;
        i += 1;
    }
    table
};

impl TokenKind {
    /// Get the numeric code of the kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Get the kind for the given code. Unknown codes map to [`TokenKind::Unassigned`].
    #[inline]
    pub fn from_code(code: u32) -> Self {
        match code {
            0..=25 => NAMED[code as usize],
            33..=126 => SYMBOL_TABLE[(code - FIRST_SYMBOL as u32) as usize],
            _ => TokenKind::Unassigned,
        }
    }

    /// Get the single-character symbol kind of the given ASCII byte.
    /// Bytes that are no symbols map to [`TokenKind::Unassigned`].
    #[inline]
    pub fn from_symbol(byte: u8) -> Self {
        if (FIRST_SYMBOL..=LAST_SYMBOL).contains(&byte) {
            SYMBOL_TABLE[(byte - FIRST_SYMBOL) as usize]
        } else {
            TokenKind::Unassigned
        }
    }

    /// Get the coarse class of the kind.
    pub fn class(self) -> TokenClass {
        match self {
            TokenKind::Unassigned => TokenClass::None,
            TokenKind::IntegerDecimal
            | TokenKind::Hexadecimal
            | TokenKind::Binary
            | TokenKind::FloatingPoint
            | TokenKind::Exponential
            | TokenKind::Boolean => TokenClass::Primitive,
            TokenKind::Identifier
            | TokenKind::Keyword
            | TokenKind::Datatype
            | TokenKind::Special => TokenClass::Identifier,
            TokenKind::Comment => TokenClass::Comment,
            TokenKind::String | TokenKind::Char => TokenClass::String,
            _ => TokenClass::Symbol,
        }
    }

    /// Get the highlight color of the kind.
    pub fn color(self) -> HighlightColor {
        match self {
            TokenKind::IntegerDecimal
            | TokenKind::Hexadecimal
            | TokenKind::Binary
            | TokenKind::FloatingPoint
            | TokenKind::Exponential
            | TokenKind::Boolean => HighlightColor::Numbers,
            TokenKind::Keyword => HighlightColor::Keywords,
            TokenKind::Datatype => HighlightColor::Datatypes,
            TokenKind::Special => HighlightColor::Special,
            TokenKind::Comment => HighlightColor::Comments,
            TokenKind::String | TokenKind::Char => HighlightColor::Strings,
            _ => HighlightColor::Default,
        }
    }

    /// Check if the kind is a single-character symbol.
    #[inline]
    pub fn is_single_symbol(self) -> bool {
        self.code() >= FIRST_SYMBOL
    }

    /// A short label used when printing token sequences.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Unassigned => "[??]",
            TokenKind::IntegerDecimal => "[num]",
            TokenKind::Hexadecimal => "[hex]",
            TokenKind::Binary => "[bin]",
            TokenKind::FloatingPoint => "[dec]",
            TokenKind::Exponential => "[exp]",
            TokenKind::Boolean => "[bool]",
            TokenKind::Identifier => "[ide]",
            TokenKind::Keyword => "[key]",
            TokenKind::Datatype => "[typ]",
            TokenKind::Special => "[spc]",
            TokenKind::Comment => "[//*]",
            TokenKind::String => "[str]",
            TokenKind::Char => "[char]",
            TokenKind::OpenCloseSquare => "[[]]",
            TokenKind::OpenCloseParen => "[()]",
            TokenKind::OpenCloseAngle => "[<>]",
            TokenKind::Assignment => "[ass]",
            TokenKind::Shift => "[shift]",
            TokenKind::Equality => "[equ]",
            TokenKind::LogicalAnd => "[&&]",
            TokenKind::LogicalOr => "[||]",
            TokenKind::GreaterEquals => "[>=]",
            TokenKind::LesserEquals => "[<=]",
            TokenKind::Increment => "[++]",
            TokenKind::Decrement => "[--]",
            TokenKind::ExclamationMark => "!",
            TokenKind::QuotationMark => "\"",
            TokenKind::HashSign => "#",
            TokenKind::DollarSign => "$",
            TokenKind::Percent => "%",
            TokenKind::Ampersand => "&",
            TokenKind::Apostrophe => "'",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Asterisk => "*",
            TokenKind::Plus => "+",
            TokenKind::Comma => ",",
            TokenKind::Minus => "-",
            TokenKind::Dot => ".",
            TokenKind::Slash => "/",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LessThan => "<",
            TokenKind::Equals => "=",
            TokenKind::GreaterThan => ">",
            TokenKind::QuestionMark => "?",
            TokenKind::AtSign => "@",
            TokenKind::OpenSquare => "[",
            TokenKind::Backslash => "\\",
            TokenKind::CloseSquare => "]",
            TokenKind::Caret => "^",
            TokenKind::Underscore => "_",
            TokenKind::GraveAccent => "`",
            TokenKind::OpenCurly => "{",
            TokenKind::VerticalBar => "|",
            TokenKind::CloseCurly => "}",
            TokenKind::Tilde => "~",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_covers_printable_ascii() {
        for code in 33u8..=126 {
            let kind = TokenKind::from_symbol(code);
            if code.is_ascii_alphanumeric() {
                assert_eq!(kind, TokenKind::Unassigned, "code {}", code);
            } else {
                assert_eq!(kind.code(), code, "code {}", code);
                assert_eq!(kind.class(), TokenClass::Symbol);
                assert_eq!(kind.color(), HighlightColor::Default);
                assert_eq!(kind.label().as_bytes(), &[code]);
            }
            assert_eq!(TokenKind::from_code(code as u32), kind);
        }
    }

    #[test]
    fn test_named_codes() {
        for code in 0u32..=25 {
            let kind = TokenKind::from_code(code);
            assert_eq!(kind.code() as u32, code);
            assert!(!kind.is_single_symbol());
        }
    }

    #[test]
    fn test_unknown_codes_are_unassigned() {
        for code in [26u32, 30, 32, 127, 128, 1000, u32::MAX] {
            assert_eq!(TokenKind::from_code(code), TokenKind::Unassigned);
        }
        assert_eq!(TokenKind::from_symbol(b' '), TokenKind::Unassigned);
        assert_eq!(TokenKind::from_symbol(127), TokenKind::Unassigned);
    }

    #[test]
    fn test_classes_and_colors() {
        assert_eq!(TokenKind::Unassigned.class(), TokenClass::None);
        assert_eq!(TokenKind::Hexadecimal.class(), TokenClass::Primitive);
        assert_eq!(TokenKind::Boolean.color(), HighlightColor::Numbers);
        assert_eq!(TokenKind::Identifier.color(), HighlightColor::Default);
        assert_eq!(TokenKind::Keyword.color(), HighlightColor::Keywords);
        assert_eq!(TokenKind::Datatype.color(), HighlightColor::Datatypes);
        assert_eq!(TokenKind::Special.class(), TokenClass::Identifier);
        assert_eq!(TokenKind::Char.class(), TokenClass::String);
        assert_eq!(TokenKind::Char.color(), HighlightColor::Strings);
        assert_eq!(TokenKind::Comment.color(), HighlightColor::Comments);
        assert_eq!(TokenKind::Shift.class(), TokenClass::Symbol);
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(TokenKind::Keyword.to_string(), "[key]");
        assert_eq!(format!("{:<7}|", TokenKind::Keyword), "[key]  |");
        assert_eq!(format!("{:>3}", TokenKind::Semicolon), "  ;");
    }
}
