//! Code-samples language selection with fallback.
//!
//! A page offers an ordered set of languages; the reader has a preference.
//! The preference wins when it is offered, otherwise the first offered
//! language is shown. A missing preference is never an error.

use crate::error::{PreferenceError, Result};
use crate::i18n::Language;
use crate::utils::first;
use tracing::debug;

/// Pick `preferred` if it is in `available`, else the first of `available`.
///
/// Returns `None` only when `available` is empty. Use [`AvailableLanguages`]
/// to rule that case out up front.
pub fn select_language<'a, L: PartialEq>(available: &'a [L], preferred: &L) -> Option<&'a L> {
    match available.iter().find(|lang| *lang == preferred) {
        Some(lang) => {
            debug!(offered = available.len(), "Preferred language is available");
            Some(lang)
        }
        None => {
            debug!(
                offered = available.len(),
                "Preferred language unavailable, falling back to first"
            );
            first(available)
        }
    }
}

/// An ordered, non-empty set of offered languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableLanguages<L = Language> {
    languages: Vec<L>,
}

impl<L: PartialEq> AvailableLanguages<L> {
    /// Wrap an ordered list of languages.
    ///
    /// # Returns
    /// * `Err(PreferenceError::NoAvailableLanguages)` if `languages` is empty
    pub fn new(languages: Vec<L>) -> Result<Self> {
        if languages.is_empty() {
            return Err(PreferenceError::NoAvailableLanguages);
        }
        Ok(Self { languages })
    }

    /// The language to show for a reader preferring `preferred`.
    pub fn select(&self, preferred: &L) -> &L {
        select_language(&self.languages, preferred).unwrap_or(&self.languages[0])
    }

    /// Check if a language is offered.
    ///
    /// # Returns
    /// `true` if `language` is one of the offered languages.
    pub fn contains(&self, language: &L) -> bool {
        self.languages.contains(language)
    }

    /// The language shown when the preference is not offered.
    pub fn fallback(&self) -> &L {
        &self.languages[0]
    }

    /// Offered languages in fallback order.
    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.languages.iter()
    }

    /// Number of offered languages, always at least one.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Offered languages as a slice, first element being the fallback.
    pub fn as_slice(&self) -> &[L] {
        &self.languages
    }
}

impl AvailableLanguages<Language> {
    /// Offer every enabled language, in registry order.
    ///
    /// The canonical language is always enabled, so the result is never empty.
    pub fn enabled() -> Self {
        Self {
            languages: Language::enabled(),
        }
    }

    /// Build from registry codes, keeping the given order.
    ///
    /// Blank entries are skipped. Unknown or disabled codes are errors.
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let languages = codes
            .into_iter()
            .filter(|code| !code.as_ref().trim().is_empty())
            .map(|code| code.as_ref().parse::<Language>())
            .collect::<Result<Vec<_>>>()?;

        Self::new(languages)
    }
}

impl<'a, L> IntoIterator for &'a AvailableLanguages<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
