//! The generic ordered schema tree.

use indexmap::IndexMap;

use crate::{NodeKind, as_sequence};

/// One node of a parsed schema tree.
///
/// Children are grouped by tag. A tag maps to either a single node or a
/// sequence of same-tag siblings, exactly as the schema loader produced it:
/// the tree itself never decides whether "one" and "many" are the same thing.
/// Use [`as_sequence`] to read children uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    kind: NodeKind,
    attrs: IndexMap<String, String>,
    children: IndexMap<String, Child>,
}

/// The children stored under one tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Exactly one child with this tag.
    Single(SchemaNode),
    /// An ordered run of same-tag siblings (possibly of length one).
    Sequence(Vec<SchemaNode>),
}

impl Child {
    /// View the stored children as a slice.
    pub fn nodes(&self) -> &[SchemaNode] {
        match self {
            Child::Single(node) => std::slice::from_ref(node),
            Child::Sequence(nodes) => nodes,
        }
    }

    /// Append a sibling, turning a single child into a sequence.
    pub fn push(&mut self, node: SchemaNode) {
        let nodes = match std::mem::replace(self, Child::Sequence(Vec::new())) {
            Child::Single(first) => vec![first, node],
            Child::Sequence(mut nodes) => {
                nodes.push(node);
                nodes
            }
        };
        *self = Child::Sequence(nodes);
    }

    /// Number of nodes stored under this tag.
    pub fn len(&self) -> usize {
        self.nodes().len()
    }

    /// Returns true if this is an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    fn into_nodes(self) -> Vec<SchemaNode> {
        match self {
            Child::Single(node) => vec![node],
            Child::Sequence(nodes) => nodes,
        }
    }
}

impl SchemaNode {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    /// A `module` statement.
    pub fn module(name: &str) -> Self {
        Self::named(NodeKind::Module, name)
    }

    /// A `container` statement.
    pub fn container(name: &str) -> Self {
        Self::named(NodeKind::Container, name)
    }

    /// A `list` statement.
    pub fn list(name: &str) -> Self {
        Self::named(NodeKind::List, name)
    }

    /// A `leaf` statement.
    pub fn leaf(name: &str) -> Self {
        Self::named(NodeKind::Leaf, name)
    }

    /// A `leaf-list` statement.
    pub fn leaf_list(name: &str) -> Self {
        Self::named(NodeKind::LeafList, name)
    }

    /// A `choice` statement.
    pub fn choice(name: &str) -> Self {
        Self::named(NodeKind::Choice, name)
    }

    /// A `case` statement.
    pub fn case(name: &str) -> Self {
        Self::named(NodeKind::Case, name)
    }

    /// A `grouping` statement.
    pub fn grouping(name: &str) -> Self {
        Self::named(NodeKind::Grouping, name)
    }

    /// A `uses` statement referencing a grouping.
    pub fn uses(grouping: &str) -> Self {
        Self::named(NodeKind::Uses, grouping)
    }

    /// A `key` statement with a whitespace-separated key specification.
    pub fn key(spec: &str) -> Self {
        Self::new(NodeKind::Key).with_attr("value", spec)
    }

    /// A `description` statement.
    pub fn description(text: &str) -> Self {
        Self::new(NodeKind::Description).with_attr("text", text)
    }

    /// A `mandatory` statement.
    pub fn mandatory(value: &str) -> Self {
        Self::new(NodeKind::Mandatory).with_attr("value", value)
    }

    fn named(kind: NodeKind, name: &str) -> Self {
        Self::new(kind).with_attr("name", name)
    }

    /// Set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Add a child under its own tag.
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        self.push_child(child);
        self
    }

    /// Add a run of children that stays a sequence even if it has one element.
    pub fn with_sequence(mut self, kind: NodeKind, nodes: Vec<SchemaNode>) -> Self {
        self.children
            .insert(kind.keyword().to_string(), Child::Sequence(nodes));
        self
    }

    /// Attach a `description` child.
    pub fn with_description(self, text: &str) -> Self {
        self.with_child(Self::description(text))
    }

    /// Attach a `mandatory` child.
    pub fn with_mandatory(self, value: &str) -> Self {
        self.with_child(Self::mandatory(value))
    }

    /// Attach a `key` child.
    pub fn with_key(self, spec: &str) -> Self {
        self.with_child(Self::key(spec))
    }

    /// Append a child under its own tag.
    pub fn push_child(&mut self, child: SchemaNode) {
        let tag = child.kind.keyword().to_string();
        match self.children.get_mut(&tag) {
            Some(existing) => existing.push(child),
            None => {
                self.children.insert(tag, Child::Single(child));
            }
        }
    }

    /// Remove and return every child stored under `kind`.
    pub fn take_children(&mut self, kind: &NodeKind) -> Vec<SchemaNode> {
        self.children
            .shift_remove(kind.keyword())
            .map(Child::into_nodes)
            .unwrap_or_default()
    }

    /// Mutable access to every child node, in tag order.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut SchemaNode> {
        self.children.values_mut().flat_map(|child| match child {
            Child::Single(node) => std::slice::from_mut(node),
            Child::Sequence(nodes) => nodes.as_mut_slice(),
        })
    }

    /// The statement kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// All attributes in document order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All child groups in document order, keyed by tag.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Child)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Raw child lookup by tag. See [`crate::child`].
    pub fn child(&self, kind: &NodeKind) -> Option<&Child> {
        self.children.get(kind.keyword())
    }

    /// The first child with the given tag, if any.
    pub fn first(&self, kind: &NodeKind) -> Option<&SchemaNode> {
        as_sequence(self.child(kind)).first()
    }

    /// The `name` attribute (statement argument for most statements).
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// The `value` attribute (argument of `key`, `mandatory`, `prefix`).
    pub fn value(&self) -> Option<&str> {
        self.attr("value")
    }

    /// Text content (argument of `description`).
    pub fn text(&self) -> Option<&str> {
        self.attr("text")
    }

    /// Text of the node's description, empty if it has none.
    pub fn description_text(&self) -> &str {
        self.first(&NodeKind::Description)
            .and_then(SchemaNode::text)
            .unwrap_or_default()
    }
}
