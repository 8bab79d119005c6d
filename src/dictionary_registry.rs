//! Module with the dictionary registry.
//!
//! The registry owns the dictionaries of all languages a program highlights. Dictionaries of
//! built-in languages are built lazily on their first request and then shared by all scanners.
//! Custom languages are added with [`DictionaryRegistry::register`].
//!
//! # Implementation
//! The dictionaries are kept in a `Mutex<FxHashMap<String, Arc<LanguageDictionary>>>` keyed by
//! language name in ASCII lowercase. The mutex only serializes lookups and the one-time construction. Scanners
//! hold an `Arc` to their dictionary and query it without any locking.

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use log::debug;
use rustc_hash::FxHashMap;

use crate::{HlError, HlErrorKind, Language, LanguageDefinition, LanguageDictionary, Result};

type DictionaryMap = FxHashMap<String, Arc<LanguageDictionary>>;

/// A registry of language dictionaries.
#[derive(Debug, Default)]
pub struct DictionaryRegistry {
    dictionaries: Mutex<DictionaryMap>,
}

impl DictionaryRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static DictionaryRegistry {
        &GLOBAL_REGISTRY
    }

    // The map only ever grows by complete entries, so a poisoned lock still holds valid data.
    fn lock(&self) -> MutexGuard<'_, DictionaryMap> {
        self.dictionaries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the dictionary of a built-in language, building it on first use.
    pub fn get(&self, language: Language) -> Arc<LanguageDictionary> {
        let mut dictionaries = self.lock();
        if let Some(dictionary) = dictionaries.get(language.name()) {
            return Arc::clone(dictionary);
        }
        let dictionary = Arc::new(Self::build_builtin(language));
        dictionaries.insert(language.name().to_string(), Arc::clone(&dictionary));
        dictionary
    }

    fn build_builtin(language: Language) -> LanguageDictionary {
        debug!("Building built-in dictionary for {}", language);
        // The built-in word lists are printable ASCII, see the language tests.
        LanguageDictionary::try_from(language.definition()).unwrap_or_else(|err| {
            log::error!("Built-in language {} is invalid: {}", language, err);
            LanguageDictionary::plain()
        })
    }

    /// Returns the dictionary with the given name, ignoring ASCII case.
    ///
    /// Built-in languages are found by name even before they were requested with
    /// [`DictionaryRegistry::get`].
    pub fn get_by_name(&self, name: &str) -> Result<Arc<LanguageDictionary>> {
        if let Some(dictionary) = self.lock().get(&name.to_ascii_lowercase()) {
            return Ok(Arc::clone(dictionary));
        }
        match Language::from_name(name) {
            Some(language) => Ok(self.get(language)),
            None => Err(HlError::new(HlErrorKind::UnknownLanguage(name.to_string()))),
        }
    }

    /// Builds the dictionary of a custom language and registers it under its name.
    ///
    /// Names are compared ignoring ASCII case. Fails if the definition contains invalid words or
    /// if the name is taken, including the names of the built-in languages.
    pub fn register(&self, definition: &LanguageDefinition) -> Result<Arc<LanguageDictionary>> {
        if Language::from_name(&definition.name).is_some() {
            return Err(HlError::new(HlErrorKind::DuplicateLanguage(
                definition.name.clone(),
            )));
        }
        let dictionary = Arc::new(LanguageDictionary::try_from(definition)?);
        let key = definition.name.to_ascii_lowercase();
        let mut dictionaries = self.lock();
        if dictionaries.contains_key(&key) {
            return Err(HlError::new(HlErrorKind::DuplicateLanguage(
                definition.name.clone(),
            )));
        }
        dictionaries.insert(key, Arc::clone(&dictionary));
        Ok(dictionary)
    }

    /// The lowercase names of all dictionaries built or registered so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

/// The process-wide registry, see [`DictionaryRegistry::global`].
static GLOBAL_REGISTRY: LazyLock<DictionaryRegistry> = LazyLock::new(DictionaryRegistry::new);

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_builtin_is_built_once() {
        init();
        let registry = DictionaryRegistry::new();
        assert!(registry.names().is_empty());
        let first = registry.get(Language::Java);
        let second = registry.get(Language::Java);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.names(), vec!["java"]);
    }

    #[test]
    fn test_get_by_name() {
        init();
        let registry = DictionaryRegistry::new();
        let c = registry.get_by_name("c").unwrap();
        assert_eq!(c.name(), "c");
        let err = registry.get_by_name("cobol").unwrap_err();
        assert!(matches!(err.kind(), HlErrorKind::UnknownLanguage(_)));
    }

    #[test]
    fn test_register_custom_language() {
        init();
        let registry = DictionaryRegistry::new();
        let definition = LanguageDefinition::new("tiny", &["let", "fn"], &["num"]);
        let registered = registry.register(&definition).unwrap();
        let found = registry.get_by_name("tiny").unwrap();
        assert!(Arc::ptr_eq(&registered, &found));

        let err = registry.register(&definition).unwrap_err();
        assert!(matches!(err.kind(), HlErrorKind::DuplicateLanguage(_)));
        let builtin = LanguageDefinition::new("glsl", &["x"], &[]);
        assert!(registry.register(&builtin).is_err());
    }

    #[test]
    fn test_names_ignore_case() {
        init();
        let registry = DictionaryRegistry::new();
        let definition = LanguageDefinition::new("Tiny", &["let"], &[]);
        let registered = registry.register(&definition).unwrap();
        for name in ["Tiny", "tiny", "TINY"] {
            let found = registry.get_by_name(name).unwrap();
            assert!(Arc::ptr_eq(&registered, &found), "{}", name);
        }
        let err = registry
            .register(&LanguageDefinition::new("TINY", &["fn"], &[]))
            .unwrap_err();
        assert!(matches!(err.kind(), HlErrorKind::DuplicateLanguage(_)));

        let java = registry.get_by_name("JAVA").unwrap();
        assert!(Arc::ptr_eq(&java, &registry.get(Language::Java)));
        assert_eq!(registry.names(), vec!["java", "tiny"]);
    }

    #[test]
    fn test_concurrent_first_use() {
        init();
        let registry = DictionaryRegistry::new();
        let dictionaries: Vec<Arc<LanguageDictionary>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| registry.get(Language::Glsl)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for dictionary in &dictionaries[1..] {
            assert!(Arc::ptr_eq(&dictionaries[0], dictionary));
        }
    }

    #[test]
    fn test_global_registry() {
        let first = DictionaryRegistry::global().get(Language::C);
        let second = DictionaryRegistry::global().get_by_name("c").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
