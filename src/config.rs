use crate::i18n::{AvailableLanguages, Language};
use crate::persistence::{FileExtension, FileName};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Languages
    pub available_languages: AvailableLanguages,
    pub preferred_language: Language,

    // Persistence
    pub preferences_file: FileName,
    pub preferences_extension: FileExtension,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Languages - comma-separated, order is the fallback order
            available_languages: match std::env::var("AVAILABLE_LANGUAGES") {
                Ok(codes) => AvailableLanguages::from_codes(codes.split(','))
                    .context("Invalid AVAILABLE_LANGUAGES")?,
                Err(_) => AvailableLanguages::enabled(),
            },
            // Any registered code; a disabled one falls back at selection time
            preferred_language: match std::env::var("PREFERRED_LANGUAGE") {
                Ok(code) => Language::from_registered_code(code.trim())
                    .context("Invalid PREFERRED_LANGUAGE")?,
                Err(_) => Language::canonical(),
            },

            // Persistence
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "preferences".to_string())
                .into(),
            preferences_extension: std::env::var("PREFERENCES_EXTENSION")
                .unwrap_or_else(|_| "json".to_string())
                .into(),
        })
    }
}
