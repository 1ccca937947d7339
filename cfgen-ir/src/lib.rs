//! Blueprint types for the cfgen schema compiler.
//!
//! A blueprint describes the tables, objects and fields that one schema module
//! defines. It is the input for generating configuration and display command
//! surfaces.
//!
//! # Architecture
//!
//! ```text
//! schema module → cfgen-compiler (build + key restructuring) → Blueprint → command generation
//! ```
//!
//! The types are plain data: once the compiler returns a blueprint nothing
//! mutates it.

mod blueprint;
mod object;

pub use blueprint::{Blueprint, Objects, Table};
pub use object::{DynamicObject, Field, Key, StaticObject};
