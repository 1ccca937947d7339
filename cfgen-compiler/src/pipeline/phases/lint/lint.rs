//! Lint trait for blueprint checks.

use cfgen_ir::Blueprint;

use crate::pipeline::Diagnostic;

/// A check over a compiled blueprint.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    /// Inspect the blueprint and record any findings.
    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>);
}
