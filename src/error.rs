use thiserror::Error;

/// Errors raised while building language sets from codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Language '{0}' is not enabled")]
    LanguageDisabled(String),

    #[error("At least one available language is required")]
    NoAvailableLanguages,
}

pub type Result<T> = std::result::Result<T, PreferenceError>;
