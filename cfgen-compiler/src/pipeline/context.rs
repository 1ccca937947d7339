//! State threaded through the pipeline phases.

use cfgen_ir::Blueprint;
use cfgen_schema::SchemaNode;

use super::{Diagnostic, Severity};
use crate::{Error, Result};

/// Compilation state for one module.
#[derive(Debug)]
pub struct CompilationContext<'a> {
    /// Every module the loader supplied.
    pub modules: &'a [SchemaNode],
    /// Name of the module being compiled.
    pub module_name: String,
    /// The module with groupings expanded (set by the resolve phase).
    pub module: Option<SchemaNode>,
    /// The compiled blueprint (set by the build phase).
    pub blueprint: Option<Blueprint>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The outcome of a successful compile.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub blueprint: Blueprint,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    /// Diagnostics of the given severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

impl<'a> CompilationContext<'a> {
    pub fn new(modules: &'a [SchemaNode], module_name: impl Into<String>) -> Self {
        Self {
            modules,
            module_name: module_name.into(),
            module: None,
            blueprint: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// The resolved module, or a phase failure if the resolve phase has not run.
    pub fn resolved_module(&self, phase: &str) -> Result<&SchemaNode> {
        self.module
            .as_ref()
            .ok_or_else(|| Error::phase(phase, "module has not been resolved"))
    }

    /// Finish compilation, handing out the blueprint and diagnostics.
    pub fn into_compilation(self) -> Result<Compilation> {
        let blueprint = self
            .blueprint
            .ok_or_else(|| Error::phase("build", "no blueprint was produced"))?;
        Ok(Compilation {
            blueprint,
            diagnostics: self.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut ctx = CompilationContext::new(&[], "sonic-test");
        ctx.add_diagnostic(Diagnostic::error("resolve", "broken"));
        ctx.add_diagnostic(Diagnostic::warning("lint", "odd"));
        ctx.add_diagnostic(Diagnostic::warning("lint", "odder"));

        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 2);
    }

    #[test]
    fn test_into_compilation_requires_blueprint() {
        let ctx = CompilationContext::new(&[], "sonic-test");
        assert!(matches!(
            ctx.into_compilation(),
            Err(Error::PhaseFailed { .. })
        ));
    }

    #[test]
    fn test_resolved_module_requires_resolve() {
        let ctx = CompilationContext::new(&[], "sonic-test");
        assert!(ctx.resolved_module("build").is_err());
    }
}
