//! Uniform access to "absent / one / many" children.
//!
//! Schema trees do not structurally distinguish a single child from a run of
//! same-tag siblings. [`child`] hands back whatever the tree stores, and
//! [`as_sequence`] is the one place that turns it into a slice. Recursive
//! builders go through `as_sequence` instead of matching on the shape
//! themselves.

use crate::{Child, NodeKind, SchemaNode};

/// Read the raw child stored under `kind`, without normalizing it.
pub fn child<'a>(node: &'a SchemaNode, kind: &NodeKind) -> Option<&'a Child> {
    node.child(kind)
}

/// Values that can be viewed as an ordered run of schema nodes.
pub trait AsSequence<'a> {
    /// Borrow the value as a slice of nodes.
    fn as_nodes(self) -> &'a [SchemaNode];
}

impl<'a> AsSequence<'a> for Option<&'a Child> {
    fn as_nodes(self) -> &'a [SchemaNode] {
        self.map(Child::nodes).unwrap_or_default()
    }
}

impl<'a> AsSequence<'a> for &'a Child {
    fn as_nodes(self) -> &'a [SchemaNode] {
        self.nodes()
    }
}

impl<'a> AsSequence<'a> for &'a [SchemaNode] {
    fn as_nodes(self) -> &'a [SchemaNode] {
        self
    }
}

impl<'a> AsSequence<'a> for &'a SchemaNode {
    fn as_nodes(self) -> &'a [SchemaNode] {
        std::slice::from_ref(self)
    }
}

/// Normalize a child value: absent becomes empty, a single node becomes a
/// one-element slice, a sequence is returned unchanged.
pub fn as_sequence<'a>(value: impl AsSequence<'a>) -> &'a [SchemaNode] {
    value.as_nodes()
}
