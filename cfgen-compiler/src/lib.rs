//! Compiles one schema module into a table/object blueprint.
//!
//! The compiler walks a module's tree top-down:
//!
//! ```text
//! module → top-level container → table containers → containers / lists → leafs, leaf-lists, choices
//! ```
//!
//! Containers under a table become static objects, lists become dynamic
//! objects whose key fields are promoted into an ordered key list once the
//! table is built.
//!
//! # Module Organization
//!
//! - [`module`] - module lookup and the container convention
//! - [`table`], [`object`], [`fields`], [`choices`] - the builders
//! - [`keys`] - key restructuring
//! - [`groupings`] - `uses`/`grouping` expansion
//! - [`pipeline`] - phases, diagnostics and lints
//! - [`display`] - blueprint tree rendering

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod choices;
pub mod display;
mod error;
pub mod fields;
pub mod groupings;
pub mod keys;
pub mod module;
pub mod object;
pub mod pipeline;
pub mod table;

use cfgen_schema::SchemaLoader;
pub use choices::resolve_choices;
pub use display::{BlueprintDisplay, BlueprintExt, DisplayStyle};
pub use error::{Error, GUIDELINES_URL, Result};
pub use fields::collect_leafs;
pub use keys::restructure_keys;
pub use module::{find_module, resolve_module};
pub use object::{build_dynamic_object, build_static_object};
pub use pipeline::{Compilation, Diagnostic, Pipeline, Severity};
pub use table::build_tables;

/// Compile a module with the default pipeline.
pub fn compile(loader: &dyn SchemaLoader, module: &str) -> Result<Compilation> {
    Pipeline::new()
        .run(loader.modules(), module)?
        .into_compilation()
}
