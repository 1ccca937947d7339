//! Table descriptors built from table-level containers.

use cfgen_ir::{Objects, Table};
use cfgen_schema::{AsSequence, NodeKind, SchemaNode, as_sequence, child};
use tracing::debug;

use crate::{
    keys::restructure_keys,
    object::{build_dynamic_object, build_static_object},
};

/// Build one table per table-level node.
pub fn build_tables<'a>(nodes: impl AsSequence<'a>) -> Vec<Table> {
    as_sequence(nodes).iter().map(build_table).collect()
}

/// Build a table from a table-level container.
///
/// Any `list` child makes the table dynamic, and its `container` children are
/// then ignored. Otherwise every `container` child becomes a static object.
pub fn build_table(node: &SchemaNode) -> Table {
    let name = node.name().unwrap_or_default().to_string();

    let objects = match child(node, &NodeKind::List) {
        Some(lists) => {
            let mut objects: Vec<_> = as_sequence(lists)
                .iter()
                .map(build_dynamic_object)
                .collect();
            restructure_keys(&mut objects);
            Objects::Dynamic(objects)
        }
        None => Objects::Static(
            as_sequence(child(node, &NodeKind::Container))
                .iter()
                .map(build_static_object)
                .collect(),
        ),
    };

    debug!(table = %name, kind = objects.as_str(), count = objects.len(), "built table");

    Table {
        name,
        description: node.description_text().to_string(),
        objects,
    }
}

/// Returns true if a table-level node declares both lists and containers.
pub(crate) fn mixes_object_kinds(node: &SchemaNode) -> bool {
    child(node, &NodeKind::List).is_some() && child(node, &NodeKind::Container).is_some()
}
