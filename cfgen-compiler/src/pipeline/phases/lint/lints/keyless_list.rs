//! Lint for lists that declare no key.

use cfgen_ir::Blueprint;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors on dynamic objects without keys: their entries cannot be addressed.
pub struct KeylessListLint;

impl Lint for KeylessListLint {
    fn name(&self) -> &'static str {
        "keyless-list"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        for table in &blueprint.tables {
            for object in table.dynamic_objects().iter().filter(|o| o.keys.is_empty()) {
                diagnostics.push(
                    Diagnostic::error("lint", format!("list '{}' declares no key", object.name))
                        .at(format!("{}.{}", table.name, object.name)),
                );
            }
        }
    }
}
