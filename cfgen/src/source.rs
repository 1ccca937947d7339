//! Where schema documents come from: flags first, then `cfgen.toml`.

use std::path::{Path, PathBuf};

use cfgen_schema::{CONFIG_FILE, Config, JsonLoader};
use clap::Args;
use tracing::debug;

/// Arguments shared by every command that loads schemas.
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Directory containing YIN-as-JSON schema documents (repeatable)
    #[arg(short = 's', long = "schema-dir")]
    pub schema_dirs: Vec<PathBuf>,

    /// Path to cfgen.toml (defaults to ./cfgen.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SchemaArgs {
    /// Load the project config. An explicit path must exist; the default may not.
    pub fn config(&self) -> cfgen_schema::Result<Config> {
        match &self.config {
            Some(path) => Config::open(path),
            None => Config::open_or_default(CONFIG_FILE),
        }
    }

    /// Schema directories: flags win over the config file, which wins over `.`.
    pub fn schema_dirs(&self, config: &Config) -> Vec<PathBuf> {
        if !self.schema_dirs.is_empty() {
            return self.schema_dirs.clone();
        }
        let dirs = config.schema_dirs();
        if dirs.is_empty() {
            vec![Path::new(".").to_path_buf()]
        } else {
            dirs
        }
    }

    /// Load every schema document from the resolved directories.
    pub fn load(&self, config: &Config) -> cfgen_schema::Result<JsonLoader> {
        let dirs = self.schema_dirs(config);
        debug!(?dirs, "loading schema documents");
        JsonLoader::from_dirs(&dirs)
    }
}
