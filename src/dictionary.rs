use log::{debug, warn};

use crate::{HlError, HlErrorKind, LanguageDefinition, Result, Trie};

/// A set of words that can be queried with a byte range of the source.
///
/// The scanner uses this to classify identifiers as keywords or datatypes. Implementations must
/// only report exact matches: the whole range must equal a stored word.
pub trait Dictionary {
    /// Check if the bytes `source[start..end]` form a stored word.
    /// Out-of-bounds or empty ranges never match.
    fn contains_word(&self, source: &[u8], start: usize, end: usize) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains_word(&self, source: &[u8], start: usize, end: usize) -> bool {
        (**self).contains_word(source, start, end)
    }
}

/// The keyword and datatype sets of a language.
#[derive(Debug, Clone, Default)]
pub struct LanguageDictionary {
    name: String,
    keywords: Trie,
    datatypes: Trie,
}

impl LanguageDictionary {
    /// Creates a dictionary without any words. Identifiers are never classified as keywords
    /// or datatypes with it.
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            ..Default::default()
        }
    }

    /// Builds the dictionary from a language definition.
    ///
    /// Fails if a word is empty or contains bytes outside of printable ASCII. Duplicate words
    /// and words that are both keyword and datatype are reported to the log.
    pub fn try_from_definition(definition: &LanguageDefinition) -> Result<Self> {
        debug!(
            "Building dictionary for language '{}' ({} keywords, {} datatypes)",
            definition.name,
            definition.keywords.len(),
            definition.datatypes.len()
        );
        let keywords = Self::build_trie(&definition.name, &definition.keywords)?;
        let datatypes = Self::build_trie(&definition.name, &definition.datatypes)?;
        for word in keywords.words() {
            if datatypes.contains(&word) {
                warn!(
                    "'{}' is both keyword and datatype in language '{}', it is highlighted as datatype",
                    word, definition.name
                );
            }
        }
        Ok(Self {
            name: definition.name.clone(),
            keywords,
            datatypes,
        })
    }

    fn build_trie(language: &str, words: &[String]) -> Result<Trie> {
        let mut trie = Trie::new();
        for word in words {
            if !Trie::is_valid_word(word) || word.bytes().any(|b| b == b' ') {
                return Err(HlError::new(HlErrorKind::InvalidWord {
                    language: language.to_string(),
                    word: word.escape_default().to_string(),
                }));
            }
            if !trie.insert(word) {
                warn!("Duplicate word '{}' in language '{}'", word, language);
            }
        }
        Ok(trie)
    }

    /// The name of the language.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The keyword set.
    #[inline]
    pub fn keywords(&self) -> &Trie {
        &self.keywords
    }

    /// The datatype set.
    #[inline]
    pub fn datatypes(&self) -> &Trie {
        &self.datatypes
    }

    /// Renders both word sets as graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, output: &mut W) {
        crate::internal::dot::dictionary_render(self, output);
    }
}

impl TryFrom<&LanguageDefinition> for LanguageDictionary {
    type Error = HlError;

    fn try_from(definition: &LanguageDefinition) -> Result<Self> {
        Self::try_from_definition(definition)
    }
}

impl TryFrom<LanguageDefinition> for LanguageDictionary {
    type Error = HlError;

    fn try_from(definition: LanguageDefinition) -> Result<Self> {
        Self::try_from_definition(&definition)
    }
}
