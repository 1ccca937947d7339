//! Schema loaders.
//!
//! The compiler never reads files itself. It is handed a [`SchemaLoader`]
//! that exposes every module available in the environment.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result, SchemaNode, json};

/// Supplies the parsed modules the compiler resolves against.
pub trait SchemaLoader {
    /// All modules available to this loader.
    fn modules(&self) -> &[SchemaNode];

    /// Names of all available modules, in load order.
    fn module_names(&self) -> Vec<&str> {
        self.modules().iter().filter_map(SchemaNode::name).collect()
    }
}

/// A loader over modules already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    modules: Vec<SchemaNode>,
}

impl MemoryLoader {
    pub fn new(modules: Vec<SchemaNode>) -> Self {
        Self { modules }
    }
}

impl SchemaLoader for MemoryLoader {
    fn modules(&self) -> &[SchemaNode] {
        &self.modules
    }
}

impl From<Vec<SchemaNode>> for MemoryLoader {
    fn from(modules: Vec<SchemaNode>) -> Self {
        Self::new(modules)
    }
}

/// A loader reading YIN-as-JSON documents from disk.
#[derive(Debug, Clone, Default)]
pub struct JsonLoader {
    modules: Vec<SchemaNode>,
    sources: Vec<PathBuf>,
}

impl JsonLoader {
    /// Load every `*.json` document found directly inside the given directories.
    ///
    /// Files are read in file-name order within each directory.
    pub fn from_dirs<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        let mut files = Vec::new();
        for dir in dirs {
            files.extend(json_files(dir.as_ref())?);
        }
        Self::from_files(&files)
    }

    /// Load the given documents.
    pub fn from_files<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut loader = Self::default();
        for file in files {
            loader.load_file(file.as_ref())?;
        }
        Ok(loader)
    }

    /// Files this loader read, in load order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let modules = json::parse_document(&content, &path.display().to_string())?;
        debug!(file = %path.display(), modules = modules.len(), "loaded schema document");

        self.modules.extend(modules);
        self.sources.push(path.to_path_buf());
        Ok(())
    }
}

impl SchemaLoader for JsonLoader {
    fn modules(&self) -> &[SchemaNode] {
        &self.modules
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
