//! Check operation - module validation.

use cfgen_compiler::{Pipeline, Result};
use cfgen_schema::SchemaLoader;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline over the module and collects its diagnostics. Fatal
/// structural problems are returned as errors.
pub fn check(pipeline: &Pipeline, loader: &dyn SchemaLoader, module: &str) -> Result<CheckReport> {
    let ctx = pipeline.run(loader.modules(), module)?;

    let table_count = ctx.blueprint.as_ref().map_or(0, |b| b.tables.len());
    let object_count = ctx.blueprint.as_ref().map_or(0, |b| b.object_count());

    let mut diagnostics = ctx.diagnostics;
    diagnostics.sort_by_key(|d| d.severity);

    Ok(CheckReport {
        module: module.to_string(),
        table_count,
        object_count,
        diagnostics,
    })
}
