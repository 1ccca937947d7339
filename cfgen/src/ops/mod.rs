//! Core operations.
//!
//! This module contains the business logic for cfgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod compile;
pub mod list;

pub use check::check;
pub use compile::{to_json, write_output};
pub use list::list;
