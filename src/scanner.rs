use std::sync::Arc;

use crate::{
    internal::{tokenize_with, ScannerImpl},
    Dictionary, DictionaryRegistry, Language, LanguageDictionary, Result, ScannerConfig,
    SourceBuffer, TokenBuffer,
};

/// A Scanner.
/// It splits a source into classified tokens in one pass over its bytes.
///
/// Identifiers are classified with the keyword and datatype sets of the scanner's
/// [`LanguageDictionary`]. The dictionary is shared, so cloning a scanner is cheap and scanners
/// can be used from several threads at once.
///
/// To create a scanner for a custom language or with a non-default configuration, use the
/// [`crate::ScannerBuilder`].
#[derive(Debug, Clone)]
pub struct Scanner {
    pub(crate) inner: ScannerImpl,
}

impl Scanner {
    /// Creates a scanner for a built-in language, using the dictionary of the global registry.
    pub fn new(language: Language) -> Self {
        Self {
            inner: ScannerImpl::new(
                DictionaryRegistry::global().get(language),
                ScannerConfig::default(),
            ),
        }
    }

    /// Scans the whole source.
    ///
    /// Fails if the source is longer than [`crate::REST_OF_INPUT`] or, under
    /// [`crate::NonAsciiPolicy::Reject`], if a token starts with a byte of 128 or above. No
    /// partial result is returned in these cases.
    pub fn tokenize(&self, source: &SourceBuffer) -> Result<TokenBuffer> {
        self.inner.tokenize(source)
    }

    /// The dictionary the scanner classifies identifiers with.
    pub fn dictionary(&self) -> &Arc<LanguageDictionary> {
        &self.inner.dictionary
    }

    /// The configuration of the scanner.
    pub fn config(&self) -> ScannerConfig {
        self.inner.config
    }
}

/// Scans a source with the given keyword and datatype sets and the default configuration.
///
/// This is the free form of [`Scanner::tokenize`] for callers that keep their word sets in
/// their own [`Dictionary`] implementation.
pub fn tokenize(
    source: &SourceBuffer,
    keywords: &dyn Dictionary,
    datatypes: &dyn Dictionary,
) -> Result<TokenBuffer> {
    tokenize_with(source, keywords, datatypes, ScannerConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TokenKind, Trie};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_scanner_is_send_and_sync() {
        assert_send_sync::<Scanner>();
        assert_send_sync::<LanguageDictionary>();
    }

    #[test]
    fn test_builtin_scanner() {
        init();
        let scanner = Scanner::new(Language::Glsl);
        assert_eq!(scanner.dictionary().name(), "glsl");
        let source = SourceBuffer::from("uniform vec3 color;");
        let tokens = scanner.tokenize(&source).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Datatype,
                TokenKind::Identifier,
                TokenKind::Semicolon
            ]
        );
    }

    /// A dictionary that knows a single word.
    struct OneWord(&'static [u8]);

    impl Dictionary for OneWord {
        fn contains_word(&self, source: &[u8], start: usize, end: usize) -> bool {
            source.get(start..end) == Some(self.0)
        }
    }

    #[test]
    fn test_tokenize_with_custom_dictionaries() {
        init();
        let source = SourceBuffer::from("loop num x");
        let mut datatypes = Trie::new();
        datatypes.insert("num");
        let tokens = tokenize(&source, &OneWord(b"loop"), &datatypes).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Keyword, TokenKind::Datatype, TokenKind::Identifier]
        );
    }
}
