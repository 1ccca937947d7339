//! Field collection from leafs and leaf-lists.

use cfgen_ir::Field;
use cfgen_schema::{NodeKind, SchemaNode, as_sequence, child};

/// Collect the leafs (or, with `is_multivalue`, the leaf-lists) of a node.
///
/// Descriptions default to the empty string. A field is mandatory only when
/// it carries a `mandatory` statement whose value is exactly `"true"`.
pub fn collect_leafs(node: &SchemaNode, is_multivalue: bool) -> Vec<Field> {
    let kind = if is_multivalue {
        NodeKind::LeafList
    } else {
        NodeKind::Leaf
    };

    as_sequence(child(node, &kind))
        .iter()
        .map(|leaf| Field {
            name: leaf.name().unwrap_or_default().to_string(),
            description: leaf.description_text().to_string(),
            is_multivalue,
            is_mandatory: is_mandatory(leaf),
        })
        .collect()
}

/// Leafs followed by leaf-lists.
pub fn collect_fields(node: &SchemaNode) -> Vec<Field> {
    let mut fields = collect_leafs(node, false);
    fields.extend(collect_leafs(node, true));
    fields
}

fn is_mandatory(leaf: &SchemaNode) -> bool {
    leaf.first(&NodeKind::Mandatory)
        .and_then(SchemaNode::value)
        .is_some_and(|value| value == "true")
}
