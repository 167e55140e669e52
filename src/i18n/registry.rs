//! Language registry: Single source of truth for supported code-samples languages.
//!
//! Every code a reader may prefer is registered here. Only enabled entries
//! can be offered; disabled ones are still recognized so a preference for
//! them falls back instead of failing.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language may be offered to readers
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Holds every language the code samples know about, in the order they are
/// offered by default. Built once on first access and immutable afterwards.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    /// Index of the single canonical entry in `languages`
    canonical: usize,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    ///
    /// # Panics
    /// Panics on first access if the built-in table does not mark exactly one
    /// enabled language as canonical.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::new(default_languages()))
    }

    fn new(languages: Vec<LanguageConfig>) -> Self {
        let canonical: Vec<usize> = languages
            .iter()
            .enumerate()
            .filter(|(_, lang)| lang.is_canonical)
            .map(|(index, _)| index)
            .collect();

        match canonical[..] {
            [index] if !languages[index].enabled => {
                panic!("canonical language '{}' is disabled", languages[index].code)
            }
            [index] => Self {
                languages,
                canonical: index,
            },
            [] => panic!("language table has no canonical entry"),
            _ => panic!("language table has more than one canonical entry"),
        }
    }

    /// Look up a registered language, enabled or not.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is registered
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Languages that may be offered to readers, in registry order.
    ///
    /// This is the default offer when nothing narrower is configured.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The canonical language, which is always enabled.
    pub fn canonical(&self) -> &LanguageConfig {
        &self.languages[self.canonical]
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            is_canonical: false,
            enabled: true,
        },
        // Samples not yet translated
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_canonical: false,
            enabled: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &'static str, is_canonical: bool) -> LanguageConfig {
        LanguageConfig {
            code,
            name: code,
            native_name: code,
            is_canonical,
            enabled: true,
        }
    }

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_finds_disabled_languages() {
        let config = LanguageRegistry::get()
            .get_by_code("ja")
            .expect("Japanese should be registered");

        assert_eq!(config.native_name, "日本語");
        assert!(!config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("xx").is_none());
    }

    #[test]
    fn test_list_enabled_keeps_registry_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "es", "fr", "de", "pt"]);
    }

    #[test]
    fn test_canonical_is_english_and_enabled() {
        let canonical = LanguageRegistry::get().canonical();

        assert_eq!(canonical.code, "en");
        assert!(canonical.is_canonical);
        assert!(canonical.enabled);
    }

    #[test]
    fn test_new_finds_canonical_index() {
        let registry = LanguageRegistry::new(vec![entry("fr", false), entry("de", true)]);
        assert_eq!(registry.canonical().code, "de");
    }

    #[test]
    #[should_panic(expected = "no canonical entry")]
    fn test_new_without_canonical_panics() {
        LanguageRegistry::new(vec![entry("fr", false)]);
    }

    #[test]
    #[should_panic(expected = "more than one canonical entry")]
    fn test_new_with_two_canonicals_panics() {
        LanguageRegistry::new(vec![entry("fr", true), entry("de", true)]);
    }

    #[test]
    #[should_panic(expected = "canonical language 'fr' is disabled")]
    fn test_new_with_disabled_canonical_panics() {
        let mut french = entry("fr", true);
        french.enabled = false;
        LanguageRegistry::new(vec![french]);
    }

    #[test]
    fn test_codes_are_unique() {
        let registry = LanguageRegistry::get();
        let mut codes: Vec<_> = registry.languages.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), registry.languages.len());
    }
}
