//! Compile operation - blueprint serialization.

use std::{fs, io::Write, path::Path};

use cfgen_ir::Blueprint;
use eyre::{Context, Result};
use tracing::debug;

/// Serialize a blueprint to JSON.
pub fn to_json(blueprint: &Blueprint, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(blueprint)
    } else {
        serde_json::to_string(blueprint)
    };
    json.wrap_err("Failed to serialize blueprint")
}

/// Write JSON to `path`, or to stdout when no path is given.
pub fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "writing blueprint");
            fs::write(path, format!("{}\n", json))
                .wrap_err_with(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).wrap_err("Failed to write to stdout")
        }
    }
}
