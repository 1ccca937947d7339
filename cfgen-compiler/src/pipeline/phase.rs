//! Pipeline phase trait.

use super::CompilationContext;
use crate::Result;

/// A step of the compile pipeline.
///
/// Built-in phases, in order:
/// - `ResolvePhase` - finds the module, expands groupings, checks containers
/// - `BuildPhase` - builds tables and restructures keys
/// - `LintPhase` - reports suspicious but legal schema shapes
///
/// Fatal problems are returned as errors; everything else goes into
/// `ctx.diagnostics`.
pub trait Phase: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()>;
}
