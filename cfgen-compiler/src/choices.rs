//! Choice/case flattening.

use cfgen_ir::Field;
use cfgen_schema::{NodeKind, SchemaNode, as_sequence, child};

use crate::fields::collect_fields;

/// Flatten every case of every choice under `node` into one field list.
///
/// Order is choice order, then case order, then leafs before leaf-lists
/// within a case. Which case a field came from is not kept: the blueprint
/// describes all alternatives even though only one applies at a time.
pub fn resolve_choices(node: &SchemaNode) -> Vec<Field> {
    let Some(choices) = child(node, &NodeKind::Choice) else {
        return Vec::new();
    };

    as_sequence(choices)
        .iter()
        .flat_map(|choice| as_sequence(child(choice, &NodeKind::Case)))
        .flat_map(collect_fields)
        .collect()
}
