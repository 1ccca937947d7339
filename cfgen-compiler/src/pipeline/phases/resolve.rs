//! Resolve phase - locate the module and check its container layout.

use cfgen_schema::{NodeKind, as_sequence};

use crate::{
    Result,
    groupings::expand_uses,
    module::{require_module, table_level_nodes},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that finds the requested module and prepares it for building.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Find the module, expand groupings and check the container layout"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let module = require_module(ctx.modules, &ctx.module_name)?;
        let expansion = expand_uses(module, ctx.modules);

        for issue in &expansion.unresolved {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), format!("{}; uses dropped", issue.message()))
                    .at(&issue.location),
            );
        }

        let top_level = as_sequence(expansion.module.child(&NodeKind::Container));
        if top_level.len() > 1 {
            ctx.add_diagnostic(Diagnostic::warning(
                self.name(),
                format!(
                    "module '{}' has {} top-level containers; only the first is compiled",
                    ctx.module_name,
                    top_level.len()
                ),
            ));
        }

        table_level_nodes(&expansion.module)?;
        ctx.module = Some(expansion.module);
        Ok(())
    }
}
