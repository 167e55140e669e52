//! Code-samples language support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: `Language` type validated against the registry
//! - `select`: Preferred-or-fallback language selection
//!
//! # Example
//!
//! ```rust
//! use preference_kit::i18n::{select_language, AvailableLanguages, Language};
//!
//! assert_eq!(select_language(&["en", "fr", "de"], &"es"), Some(&"en"));
//!
//! let offered = AvailableLanguages::from_codes(["en", "fr"]).unwrap();
//! assert_eq!(*offered.select(&Language::SPANISH), Language::ENGLISH);
//! ```

mod language;
mod registry;
mod select;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use select::{select_language, AvailableLanguages};
