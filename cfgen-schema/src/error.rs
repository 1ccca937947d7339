use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for cfgen-schema operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(cfgen::io),
        help("check that the schema directory exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema document '{file}'")]
    #[diagnostic(
        code(cfgen::json),
        help("schema documents must be YIN trees serialized as JSON")
    )]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema document '{file}': {message}")]
    #[diagnostic(code(cfgen::invalid_document))]
    InvalidDocument { file: String, message: String },

    #[error("failed to parse config file '{path}'")]
    #[diagnostic(code(cfgen::config), help("see `cfgen --help` for the config layout"))]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an invalid document error.
    pub fn invalid_document(file: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidDocument {
            file: file.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
