//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod list;
mod output;

pub use check::CheckReport;
pub use list::{ListReport, ModuleEntry};
pub use output::{Report, TerminalOutput};
