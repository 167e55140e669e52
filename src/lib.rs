//! Small helpers shared by the preferences and persistence layers:
//! code-samples language selection, persisted file naming and dynamic
//! value classification.

pub mod collection;
pub mod config;
pub mod error;
pub mod i18n;
pub mod persistence;
pub mod utils;

pub use collection::{is_collection, Symbol, Value};
pub use error::PreferenceError;
pub use i18n::{select_language, AvailableLanguages, Language};
pub use persistence::{create_extension_adder, FileExtension, FileName};
