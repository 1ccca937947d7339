//! Built-in pipeline phases.
//!
//! - [`ResolvePhase`] - finds the module, expands groupings, checks containers
//! - [`BuildPhase`] - builds tables and restructures keys
//! - [`LintPhase`] - runs lints over the blueprint

mod build;
mod lint;
mod resolve;

pub use build::BuildPhase;
pub use lint::{
    DuplicateFieldLint, EmptyDescriptionLint, KeylessListLint, Lint, LintPhase, UnmatchedKeyLint,
};
pub use resolve::ResolvePhase;
