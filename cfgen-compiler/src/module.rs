//! Module lookup and the two-level container convention.
//!
//! A module is expected to look like:
//!
//! ```text
//! module sonic-test
//! └─ container sonic-test        (top-level container)
//!    ├─ container TEST_TABLE     (table-level node)
//!    └─ container OTHER_TABLE
//! ```

use cfgen_ir::Table;
use cfgen_schema::{Child, NodeKind, SchemaNode, child};
use tracing::debug;

use crate::{Error, Result, groupings::expand_uses, table::build_tables};

/// Find a module by its declared name.
pub fn find_module<'a>(modules: &'a [SchemaNode], name: &str) -> Option<&'a SchemaNode> {
    modules
        .iter()
        .find(|m| m.kind() == &NodeKind::Module && m.name() == Some(name))
}

/// Find a module, failing with [`Error::ModuleNotFound`] if it is absent.
pub fn require_module<'a>(modules: &'a [SchemaNode], name: &str) -> Result<&'a SchemaNode> {
    find_module(modules, name).ok_or_else(|| {
        let available: Vec<_> = modules.iter().filter_map(SchemaNode::name).collect();
        Error::module_not_found(name, &available)
    })
}

/// The module's top-level container.
///
/// Only the first one is used if a module declares several.
pub fn top_level_container(module: &SchemaNode) -> Result<&SchemaNode> {
    module
        .first(&NodeKind::Container)
        .ok_or_else(|| Error::MissingTopLevelContainer {
            module: module_name(module),
        })
}

/// The table-level nodes below the module's top-level container.
pub fn table_level_nodes(module: &SchemaNode) -> Result<&Child> {
    let top = top_level_container(module)?;
    child(top, &NodeKind::Container)
        .filter(|tables| !tables.is_empty())
        .ok_or_else(|| Error::MissingTableContainer {
            module: module_name(module),
            container: top.name().unwrap_or_default().to_string(),
        })
}

/// Compile the tables of one module.
///
/// This is the pipeline-free entry point: it resolves the module, expands its
/// groupings and builds every table. Diagnostics are only logged.
pub fn resolve_module(modules: &[SchemaNode], name: &str) -> Result<Vec<Table>> {
    let module = require_module(modules, name)?;
    debug!(module = name, "resolving module");

    let expansion = expand_uses(module, modules);
    let tables = table_level_nodes(&expansion.module)?;
    Ok(build_tables(tables))
}

fn module_name(module: &SchemaNode) -> String {
    module.name().unwrap_or_default().to_string()
}
