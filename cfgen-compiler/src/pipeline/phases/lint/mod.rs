//! Lint phase - reports legal but suspicious blueprint shapes.

mod lint;
pub mod lints;

pub use lint::Lint;
pub use lints::{DuplicateFieldLint, EmptyDescriptionLint, KeylessListLint, UnmatchedKeyLint};

use crate::{
    Result,
    pipeline::{CompilationContext, Phase},
};

/// Phase that runs lints over the built blueprint.
pub struct LintPhase {
    lints: Vec<Box<dyn Lint>>,
}

impl LintPhase {
    /// A lint phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(KeylessListLint),
                Box::new(UnmatchedKeyLint),
                Box::new(DuplicateFieldLint),
                Box::new(EmptyDescriptionLint),
            ],
        }
    }

    /// A lint phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of the lints that will run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for LintPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for LintPhase {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn description(&self) -> &'static str {
        "Report keyless lists, unmatched keys, duplicate fields and missing descriptions"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let Some(blueprint) = &ctx.blueprint else {
            return Ok(());
        };

        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(blueprint, &mut diagnostics);
        }
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}
