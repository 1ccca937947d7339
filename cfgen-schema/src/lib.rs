//! Schema tree model and loaders for the cfgen blueprint compiler.
//!
//! # Architecture
//!
//! ```text
//! *.json (YIN as JSON) → cfgen-schema (SchemaNode trees) → cfgen-compiler → cfgen-ir
//! ```
//!
//! Trees are read-only once loaded. Children are kept exactly as the source
//! stored them (absent, single, or a run of siblings); [`as_sequence`] is the
//! normalization point for readers.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod access;
mod config;
mod error;
mod json;
mod kind;
mod loader;
mod node;

use std::path::Path;

pub use access::{AsSequence, as_sequence, child};
pub use config::{CONFIG_FILE, Config, OutputConfig, SchemaConfig};
pub use error::{Error, Result};
pub use kind::NodeKind;
pub use loader::{JsonLoader, MemoryLoader, SchemaLoader};
pub use node::{Child, SchemaNode};

/// Parse the modules of a schema document from a file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<SchemaNode>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    json::parse_document(&content, &path.display().to_string())
}

/// Parse the modules of a schema document from a string.
pub fn parse_str(content: &str) -> Result<Vec<SchemaNode>> {
    json::parse_document(content, "<string>")
}
