//! Lint for fields without descriptions.

use cfgen_ir::{Blueprint, Field};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Notes fields that have no description; generated help text will be blank.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        for table in &blueprint.tables {
            for object in table.static_objects() {
                check_fields(&table.name, &object.name, &object.attrs, diagnostics);
            }
            for object in table.dynamic_objects() {
                check_fields(&table.name, &object.name, &object.attrs, diagnostics);
            }
        }
    }
}

fn check_fields(table: &str, object: &str, attrs: &[Field], diagnostics: &mut Vec<Diagnostic>) {
    for field in attrs.iter().filter(|f| f.description.is_empty()) {
        diagnostics.push(
            Diagnostic::info("lint", format!("field '{}' has no description", field.name))
                .at(format!("{}.{}.{}", table, object, field.name)),
        );
    }
}
