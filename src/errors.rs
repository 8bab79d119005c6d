use thiserror::Error;

/// The result type for the `hlscan` crate.
pub type Result<T> = std::result::Result<T, HlError>;

/// The error type for the `hlscan` crate.
#[derive(Error, Debug)]
pub struct HlError {
    /// The source of the error.
    pub source: Box<HlErrorKind>,
}

impl HlError {
    /// Create a new `HlError`.
    pub fn new(kind: HlErrorKind) -> Self {
        HlError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &HlErrorKind {
        &self.source
    }
}

impl std::fmt::Display for HlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum HlErrorKind {
    /// The source contains a byte outside of 7-bit ASCII and the scanner is configured to
    /// reject such input.
    #[error("Non-ASCII byte 0x{byte:02x} at offset {offset}")]
    NonAsciiByte {
        /// The offending byte.
        byte: u8,
        /// The byte offset of the offending byte in the source.
        offset: usize,
    },

    /// The source is longer than the run encoder can represent.
    #[error("Source of {0} bytes exceeds the maximum highlightable length")]
    SourceTooLarge(usize),

    /// A dictionary word is empty or contains bytes outside of printable ASCII.
    #[error("Invalid word '{word}' in language '{language}'")]
    InvalidWord {
        /// The name of the language the word was defined for.
        language: String,
        /// The rejected word, escaped for display.
        word: String,
    },

    /// A language with the same name is already registered.
    #[error("Language '{0}' is already registered")]
    DuplicateLanguage(String),

    /// No built-in or registered language has the given name.
    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// A language definition could not be deserialized.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<HlErrorKind> for HlError {
    fn from(kind: HlErrorKind) -> Self {
        HlError::new(kind)
    }
}

impl From<std::io::Error> for HlError {
    fn from(error: std::io::Error) -> Self {
        HlError::new(HlErrorKind::IoError(error))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for HlError {
    fn from(error: serde_json::Error) -> Self {
        HlError::new(HlErrorKind::JsonError(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HlError::new(HlErrorKind::NonAsciiByte {
            byte: 0xc3,
            offset: 7,
        });
        assert_eq!(err.to_string(), "Non-ASCII byte 0xc3 at offset 7");
        assert!(matches!(
            err.kind(),
            HlErrorKind::NonAsciiByte { byte: 0xc3, .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: HlError = io.into();
        assert!(matches!(err.kind(), HlErrorKind::IoError(_)));
    }
}
