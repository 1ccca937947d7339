//! List operation - module discovery.

use cfgen_compiler::module::top_level_container;
use cfgen_schema::SchemaLoader;

use crate::reports::{ListReport, ModuleEntry};

/// Execute the list operation.
pub fn list(loader: &dyn SchemaLoader) -> ListReport {
    let modules = loader
        .modules()
        .iter()
        .map(|module| ModuleEntry {
            name: module.name().unwrap_or_default().to_string(),
            top_level: top_level_container(module)
                .ok()
                .and_then(|c| c.name())
                .map(str::to_string),
        })
        .collect();

    ListReport { modules }
}
