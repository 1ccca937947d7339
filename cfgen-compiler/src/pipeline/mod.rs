//! Compile pipeline.
//!
//! [`Pipeline`] runs the compile as explicit phases over a shared
//! [`CompilationContext`]:
//!
//! - resolve → build → lint
//! - fatal errors stop the run, everything else becomes a [`Diagnostic`]
//! - callers can append their own phases
//!
//! # Example
//!
//! ```ignore
//! use cfgen_compiler::pipeline::{Pipeline, Severity};
//!
//! let ctx = Pipeline::new().run(loader.modules(), "sonic-port")?;
//! for diag in &ctx.diagnostics {
//!     if diag.severity == Severity::Warning {
//!         eprintln!("warning: {}", diag);
//!     }
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{Compilation, CompilationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
