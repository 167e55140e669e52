//! Language type: a code validated against the registry.

use crate::error::{PreferenceError, Result};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A language known to the registry.
///
/// How a `Language` is built decides whether it may be disabled: offered
/// languages come from [`Language::from_code`] and are always enabled, while
/// reader preferences come from [`Language::from_registered_code`] and may
/// name a language the samples do not cover yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fr")
    code: &'static str,
}

impl Language {
    /// English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SPANISH: Language = Language { code: "es" };

    /// Create an offerable Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err(PreferenceError::UnknownLanguage)` if the code is not registered
    /// * `Err(PreferenceError::LanguageDisabled)` if it is registered but disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let language = Language::from_registered_code(code)?;
        if !language.is_enabled() {
            return Err(PreferenceError::LanguageDisabled(code.to_string()));
        }
        Ok(language)
    }

    /// Create a Language from any registered code, enabled or not.
    ///
    /// Used for reader preferences: a preference for a disabled language is
    /// valid and resolves to the fallback at selection time.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err(PreferenceError::UnknownLanguage)` otherwise
    pub fn from_registered_code(code: &str) -> Result<Language> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| PreferenceError::UnknownLanguage(code.to_string()))
    }

    /// The canonical language, used when nothing else is configured.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Every enabled language, in registry order.
    pub fn enabled() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// The ISO 639-1 code (e.g., "en", "fr").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Language built through a constructor or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name (e.g., "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name in the language itself (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Whether code samples may be offered in this language.
    pub fn is_enabled(&self) -> bool {
        self.config().enabled
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Parses an offerable language; surrounding whitespace is ignored.
impl std::str::FromStr for Language {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s.trim())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Accepts any registered code, so stored preferences for a language that
/// was later disabled still load.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_registered_code(&code).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_spanish_constant() {
        let spanish = Language::SPANISH;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.native_name(), "Español");
        assert!(!spanish.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_french() {
        let language = Language::from_code("fr").expect("Should succeed");
        assert_eq!(language.code(), "fr");
        assert_eq!(language.name(), "French");
    }

    #[test]
    fn test_from_code_unknown() {
        let result = Language::from_code("xx");
        assert_eq!(
            result,
            Err(PreferenceError::UnknownLanguage("xx".to_string()))
        );
    }

    #[test]
    fn test_from_code_disabled() {
        let result = Language::from_code("ja");
        assert_eq!(
            result,
            Err(PreferenceError::LanguageDisabled("ja".to_string()))
        );
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_registered_code_accepts_disabled() {
        let language = Language::from_registered_code("ja").expect("Should succeed");
        assert_eq!(language.code(), "ja");
        assert!(!language.is_enabled());
    }

    #[test]
    fn test_from_registered_code_unknown() {
        assert_eq!(
            Language::from_registered_code("xx"),
            Err(PreferenceError::UnknownLanguage("xx".to_string()))
        );
    }

    #[test]
    fn test_from_registered_code_matches_from_code_when_enabled() {
        assert_eq!(
            Language::from_registered_code("de"),
            Language::from_code("de")
        );
    }

    #[test]
    fn test_enabled_in_registry_order() {
        let codes: Vec<_> = Language::enabled().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "es", "fr", "de", "pt"]);
    }

    #[test]
    fn test_from_str_trims_whitespace() {
        let language: Language = " de ".parse().expect("Should parse");
        assert_eq!(language.code(), "de");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::SPANISH.to_string(), "es");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::ENGLISH).unwrap();
        assert_eq!(json, "\"en\"");
    }

    #[test]
    fn test_deserializes_registered_codes() {
        let fr: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(fr.code(), "fr");

        let ja: Language = serde_json::from_str("\"ja\"").unwrap();
        assert!(!ja.is_enabled());
    }

    #[test]
    fn test_deserialize_unknown_code_fails() {
        let result = serde_json::from_str::<Language>("\"xx\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_error_message_mentions_code() {
        let err = Language::from_code("klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }
}
