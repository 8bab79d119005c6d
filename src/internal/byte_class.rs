//! Byte classification used by the scanner.
//!
//! The categories partition the ASCII range [0, 127]. Bytes of 128 and above form their own
//! category that the scanner handles according to its [`crate::NonAsciiPolicy`].

/// The category of the byte a token starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ByteCategory {
    /// Control characters and space, 0 to 32.
    Whitespace,
    /// Letters and `_`.
    IdentifierStart,
    /// `0` to `9`.
    Digit,
    /// Symbols 33 to 47: ``! " # $ % & ' ( ) * + , - . /``
    SymbolsA,
    /// Symbols 58 to 64: `: ; < = > ? @`
    SymbolsB,
    /// Symbols 91 to 96: ``[ \ ] ^ _ ` `` where `_` never gets here.
    SymbolsC,
    /// Symbols 123 to 127: `{ | } ~` and DEL.
    SymbolsD,
    /// 128 and above.
    NonAscii,
}

impl ByteCategory {
    #[inline]
    pub(crate) fn of(byte: u8) -> Self {
        match byte {
            0..=32 => ByteCategory::Whitespace,
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => ByteCategory::IdentifierStart,
            b'0'..=b'9' => ByteCategory::Digit,
            33..=47 => ByteCategory::SymbolsA,
            58..=64 => ByteCategory::SymbolsB,
            91..=96 => ByteCategory::SymbolsC,
            123..=127 => ByteCategory::SymbolsD,
            128..=255 => ByteCategory::NonAscii,
        }
    }
}

#[inline]
pub(crate) fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline]
pub(crate) fn is_number_continue(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'_'
}

#[inline]
pub(crate) fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

#[inline]
pub(crate) fn is_hex_continue(byte: u8) -> bool {
    byte.is_ascii_hexdigit() || byte == b'_'
}

#[inline]
pub(crate) fn is_binary_digit(byte: u8) -> bool {
    byte == b'0' || byte == b'1'
}

#[inline]
pub(crate) fn is_binary_continue(byte: u8) -> bool {
    is_binary_digit(byte) || byte == b'_'
}

#[inline]
pub(crate) fn is_identifier_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// `f`, `F`, `d` or `D` after a floating point or exponential literal.
#[inline]
pub(crate) fn is_float_suffix(byte: u8) -> bool {
    matches!(byte, b'f' | b'F' | b'd' | b'D')
}

/// Uppercase letters, digits and underscores only.
pub(crate) fn is_all_caps(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&b| b.is_ascii_uppercase() || is_number_continue(b))
}

pub(crate) fn is_boolean_literal(bytes: &[u8]) -> bool {
    bytes == b"true" || bytes == b"false"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_partition_ascii() {
        for byte in 0u8..=127 {
            let category = ByteCategory::of(byte);
            assert_ne!(category, ByteCategory::NonAscii, "byte {}", byte);
            if byte.is_ascii_punctuation() && byte != b'_' {
                assert!(
                    matches!(
                        category,
                        ByteCategory::SymbolsA
                            | ByteCategory::SymbolsB
                            | ByteCategory::SymbolsC
                            | ByteCategory::SymbolsD
                    ),
                    "byte {}",
                    byte
                );
            }
        }
        assert_eq!(ByteCategory::of(b'_'), ByteCategory::IdentifierStart);
        assert_eq!(ByteCategory::of(b' '), ByteCategory::Whitespace);
        assert_eq!(ByteCategory::of(127), ByteCategory::SymbolsD);
        assert_eq!(ByteCategory::of(0xc3), ByteCategory::NonAscii);
    }

    #[test]
    fn test_all_caps() {
        assert!(is_all_caps(b"MAX_VALUE"));
        assert!(is_all_caps(b"GL_TEXTURE_2D"));
        assert!(is_all_caps(b"_"));
        assert!(!is_all_caps(b"Max"));
        assert!(!is_all_caps(&[b'A', 0xc3]));
    }

    #[test]
    fn test_boolean_literal() {
        assert!(is_boolean_literal(b"true"));
        assert!(is_boolean_literal(b"false"));
        assert!(!is_boolean_literal(b"True"));
        assert!(!is_boolean_literal(b"falsey"));
    }
}
