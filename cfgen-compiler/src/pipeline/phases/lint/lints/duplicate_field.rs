//! Lint for fields declared twice in one object.

use std::collections::HashSet;

use cfgen_ir::{Blueprint, Field};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when an object ends up with two attrs of the same name, which
/// usually means two `case` branches declare the same leaf.
pub struct DuplicateFieldLint;

impl Lint for DuplicateFieldLint {
    fn name(&self) -> &'static str {
        "duplicate-field"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        for table in &blueprint.tables {
            let objects = table
                .static_objects()
                .iter()
                .map(|o| (o.name.as_str(), o.attrs.as_slice()))
                .chain(
                    table
                        .dynamic_objects()
                        .iter()
                        .map(|o| (o.name.as_str(), o.attrs.as_slice())),
                );

            for (object, attrs) in objects {
                for name in duplicates(attrs) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "lint",
                            format!("field '{}' is declared more than once in '{}'", name, object),
                        )
                        .at(format!("{}.{}.{}", table.name, object, name)),
                    );
                }
            }
        }
    }
}

fn duplicates(attrs: &[Field]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    attrs
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .collect()
}
