//! Build phase - turn table-level nodes into the blueprint.

use cfgen_ir::Blueprint;
use cfgen_schema::as_sequence;

use crate::{
    Result,
    module::table_level_nodes,
    pipeline::{CompilationContext, Diagnostic, Phase},
    table::{build_tables, mixes_object_kinds},
};

/// Phase that builds every table of the resolved module.
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Build tables and objects, then promote key fields"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let module = ctx.resolved_module(self.name())?;
        let nodes = table_level_nodes(module)?;

        let mut diagnostics = Vec::new();
        for node in as_sequence(nodes).iter().filter(|n| mixes_object_kinds(n)) {
            let table = node.name().unwrap_or_default();
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("table '{}' mixes lists and containers; containers ignored", table),
                )
                .at(table),
            );
        }

        let blueprint = Blueprint::new(build_tables(nodes));
        ctx.diagnostics.extend(diagnostics);
        ctx.blueprint = Some(blueprint);
        Ok(())
    }
}
