use std::sync::Arc;

use crate::{
    internal::ScannerImpl, scanner::Scanner, DictionaryRegistry, Language, LanguageDefinition,
    LanguageDictionary, NonAsciiPolicy, Result, ScannerConfig,
};

/// Where the builder takes the dictionary from.
#[derive(Debug, Clone, Default)]
enum DictionarySource {
    /// Empty word sets.
    #[default]
    Plain,
    Language(Language),
    Dictionary(Arc<LanguageDictionary>),
    Definition(LanguageDefinition),
}

/// A builder for creating a scanner.
///
/// Without a language, dictionary or definition the scanner uses empty word sets. Every
/// identifier then is an [`crate::TokenKind::Identifier`], a boolean literal or special.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder<'r> {
    source: DictionarySource,
    registry: Option<&'r DictionaryRegistry>,
    config: ScannerConfig,
}

impl<'r> ScannerBuilder<'r> {
    /// Creates a new scanner builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the dictionary of a built-in language.
    /// It is taken from the registry set with [`ScannerBuilder::registry`], or from the global
    /// registry.
    pub fn language(mut self, language: Language) -> Self {
        self.source = DictionarySource::Language(language);
        self
    }

    /// Uses an already built dictionary.
    pub fn dictionary(mut self, dictionary: Arc<LanguageDictionary>) -> Self {
        self.source = DictionarySource::Dictionary(dictionary);
        self
    }

    /// Builds the dictionary from a language definition when the scanner is built.
    /// The dictionary is owned by the scanner and not registered anywhere.
    pub fn definition(mut self, definition: LanguageDefinition) -> Self {
        self.source = DictionarySource::Definition(definition);
        self
    }

    /// Sets the registry built-in languages are looked up in.
    pub fn registry(mut self, registry: &'r DictionaryRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the handling of non-ASCII bytes.
    pub fn non_ascii_policy(mut self, policy: NonAsciiPolicy) -> Self {
        self.config.non_ascii = policy;
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the scanner from the scanner builder.
    /// Fails if a language definition contains an invalid word.
    pub fn build(self) -> Result<Scanner> {
        let dictionary = match self.source {
            DictionarySource::Plain => Arc::new(LanguageDictionary::plain()),
            DictionarySource::Language(language) => self
                .registry
                .unwrap_or(DictionaryRegistry::global())
                .get(language),
            DictionarySource::Dictionary(dictionary) => dictionary,
            DictionarySource::Definition(definition) => {
                Arc::new(LanguageDictionary::try_from(definition)?)
            }
        };
        Ok(Scanner {
            inner: ScannerImpl::new(dictionary, self.config),
        })
    }
}
