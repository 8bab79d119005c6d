#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the scanner treats bytes of 128 and above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NonAsciiPolicy {
    /// Abort the scan with [`crate::HlErrorKind::NonAsciiByte`].
    #[default]
    Reject,
    /// Treat the bytes as identifier characters. They never match a dictionary word and are no
    /// uppercase letters.
    Opaque,
}

/// The configuration of a scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScannerConfig {
    /// The handling of non-ASCII bytes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub non_ascii: NonAsciiPolicy,
}

impl ScannerConfig {
    /// Creates a configuration with the given non-ASCII policy.
    pub fn with_non_ascii(non_ascii: NonAsciiPolicy) -> Self {
        Self { non_ascii }
    }
}
