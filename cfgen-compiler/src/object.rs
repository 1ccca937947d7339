//! Object descriptors built from containers and lists.

use cfgen_ir::{DynamicObject, Field, Key, StaticObject};
use cfgen_schema::{NodeKind, SchemaNode};

use crate::{choices::resolve_choices, fields::collect_leafs};

/// Build a single-instance object from a container.
pub fn build_static_object(node: &SchemaNode) -> StaticObject {
    StaticObject {
        name: node.name().unwrap_or_default().to_string(),
        description: node.description_text().to_string(),
        attrs: collect_attrs(node),
    }
}

/// Build a keyed object from a list.
///
/// Keys come straight from the key specification and carry no description;
/// [`restructure_keys`](crate::restructure_keys) fills them in and removes
/// the key fields from `attrs`.
pub fn build_dynamic_object(node: &SchemaNode) -> DynamicObject {
    DynamicObject {
        name: node.name().unwrap_or_default().to_string(),
        description: node.description_text().to_string(),
        attrs: collect_attrs(node),
        keys: parse_key_spec(node),
    }
}

/// All fields of an object: leafs, then leaf-lists, then the fields of every
/// choice alternative.
pub fn collect_attrs(node: &SchemaNode) -> Vec<Field> {
    let mut attrs = collect_leafs(node, false);
    attrs.extend(collect_leafs(node, true));
    attrs.extend(resolve_choices(node));
    attrs
}

/// Split a list's whitespace-separated key specification into keys.
pub fn parse_key_spec(node: &SchemaNode) -> Vec<Key> {
    node.first(&NodeKind::Key)
        .and_then(SchemaNode::value)
        .map(|spec| spec.split_whitespace().map(Key::new).collect())
        .unwrap_or_default()
}
