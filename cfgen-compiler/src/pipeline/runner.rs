//! Pipeline orchestrator.

use cfgen_schema::SchemaNode;
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{BuildPhase, LintPhase, ResolvePhase},
};
use crate::Result;

/// Runs the built-in phases followed by any added phases.
///
/// ```ignore
/// let ctx = Pipeline::new().phase(MyPhase).run(modules, "sonic-port")?;
/// ```
pub struct Pipeline {
    lint: LintPhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// A pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            lint: LintPhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the lint phase (e.g. `LintPhase::empty()` to skip lints).
    pub fn lints(mut self, lint: LintPhase) -> Self {
        self.lint = lint;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Compile `module_name` against `modules`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by a phase.
    pub fn run<'a>(
        &self,
        modules: &'a [SchemaNode],
        module_name: &str,
    ) -> Result<CompilationContext<'a>> {
        let mut ctx = CompilationContext::new(modules, module_name);

        for phase in self.all_phases() {
            debug!(phase = phase.name(), module = module_name, "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }

    fn all_phases(&self) -> impl Iterator<Item = &dyn Phase> {
        let builtin: [&dyn Phase; 3] = [&ResolvePhase, &BuildPhase, &self.lint];
        builtin
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
