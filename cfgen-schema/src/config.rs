//! Project configuration (`cfgen.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Default config file name.
pub const CONFIG_FILE: &str = "cfgen.toml";

/// Root of `cfgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where schema documents are loaded from.
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory the config file lives in; relative paths resolve against it.
    #[serde(skip)]
    base: PathBuf,
}

/// `[schema]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Directories searched for `*.json` schema documents.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_at(&content, path)
    }

    /// Open a config file, falling back to defaults if it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config content that was read from `path`.
    pub fn from_str_at(content: &str, path: &Path) -> Result<Self> {
        let mut config: Config = toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Schema directories, resolved against the config file location.
    pub fn schema_dirs(&self) -> Vec<PathBuf> {
        self.schema
            .dirs
            .iter()
            .map(|dir| self.base.join(dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_str_at("", Path::new("cfgen.toml")).expect("parse");
        assert!(config.schema.dirs.is_empty());
        assert!(config.output.pretty);
    }

    #[test]
    fn test_dirs_resolve_against_config() {
        let config = Config::from_str_at(
            r#"
            [schema]
            dirs = ["yang-models", "/abs/models"]

            [output]
            pretty = false
            "#,
            Path::new("project/cfgen.toml"),
        )
        .expect("parse");

        assert_eq!(
            config.schema_dirs(),
            [
                PathBuf::from("project/yang-models"),
                PathBuf::from("/abs/models")
            ]
        );
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = Config::from_str_at("[commands]\n", Path::new("cfgen.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_missing_file_defaults() {
        let config = Config::open_or_default("/no/such/cfgen.toml").expect("defaults");
        assert!(config.output.pretty);
    }
}
