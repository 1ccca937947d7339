//! Lint for keys that name no field.

use cfgen_ir::Blueprint;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about list keys whose name matched none of the list's fields.
///
/// The key stays in the blueprint without a description.
pub struct UnmatchedKeyLint;

impl Lint for UnmatchedKeyLint {
    fn name(&self) -> &'static str {
        "unmatched-key"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        for table in &blueprint.tables {
            for object in table.dynamic_objects() {
                for key in object.keys.iter().filter(|k| !k.is_matched()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "lint",
                            format!(
                                "key '{}' of '{}' names no field of the list",
                                key.name, object.name
                            ),
                        )
                        .at(format!("{}.{}.{}", table.name, object.name, key.name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cfgen_ir::{DynamicObject, Key, Objects, Table};

    use super::*;

    fn blueprint(keys: Vec<Key>) -> Blueprint {
        Blueprint::new(vec![Table {
            name: "T".into(),
            description: "".into(),
            objects: Objects::Dynamic(vec![DynamicObject {
                name: "T_LIST".into(),
                description: "".into(),
                attrs: vec![],
                keys,
            }]),
        }])
    }

    #[test]
    fn test_unmatched() {
        let mut diagnostics = Vec::new();
        UnmatchedKeyLint.check(&blueprint(vec![Key::new("ID")]), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("T.T_LIST.ID"));
    }

    #[test]
    fn test_matched() {
        let mut diagnostics = Vec::new();
        UnmatchedKeyLint.check(
            &blueprint(vec![Key::described("ID", "")]),
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
    }
}
