//! Persistence helpers.

mod naming;

pub use naming::{add_extension, create_extension_adder, FileExtension, FileName};
