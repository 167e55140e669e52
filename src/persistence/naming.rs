//! File names for persisted artifacts.
//!
//! Names are built by plain concatenation. Nothing here touches the
//! filesystem, and neither part is validated: empty strings, embedded
//! periods and path separators pass through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file name, with or without an extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

/// A file extension without the leading period (e.g., "json").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileExtension(String);

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype!(FileName);
string_newtype!(FileExtension);

/// Build a function that appends `.{extension}` to file names.
///
/// # Example
/// ```
/// use preference_kit::persistence::{create_extension_adder, FileName};
///
/// let add_json = create_extension_adder("json");
/// assert_eq!(add_json(&FileName::from("config")).as_str(), "config.json");
/// ```
pub fn create_extension_adder(
    extension: impl Into<FileExtension>,
) -> impl Fn(&FileName) -> FileName + Clone + Send + Sync {
    let extension = extension.into();
    move |file_name: &FileName| add_extension(&extension, file_name)
}

/// `<file_name>.<extension>`.
pub fn add_extension(extension: &FileExtension, file_name: &FileName) -> FileName {
    FileName(format!("{}.{}", file_name.0, extension.0))
}
