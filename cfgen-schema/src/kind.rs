//! Statement kinds found in a schema tree.

use std::fmt;

/// The tag of a schema node.
///
/// Every child map in a [`SchemaNode`](crate::SchemaNode) is keyed by the
/// keyword of this tag, so `kind` doubles as the lookup key for
/// [`child`](crate::child).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Module,
    Container,
    List,
    Leaf,
    LeafList,
    Choice,
    Case,
    Key,
    Description,
    Mandatory,
    Grouping,
    Uses,
    Import,
    Prefix,
    /// Any statement the compiler does not interpret (`type`, `must`, ...).
    Other(String),
}

impl NodeKind {
    /// Get the schema-language keyword for this kind.
    pub fn keyword(&self) -> &str {
        match self {
            NodeKind::Module => "module",
            NodeKind::Container => "container",
            NodeKind::List => "list",
            NodeKind::Leaf => "leaf",
            NodeKind::LeafList => "leaf-list",
            NodeKind::Choice => "choice",
            NodeKind::Case => "case",
            NodeKind::Key => "key",
            NodeKind::Description => "description",
            NodeKind::Mandatory => "mandatory",
            NodeKind::Grouping => "grouping",
            NodeKind::Uses => "uses",
            NodeKind::Import => "import",
            NodeKind::Prefix => "prefix",
            NodeKind::Other(keyword) => keyword,
        }
    }

    /// Map a schema-language keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "module" => NodeKind::Module,
            "container" => NodeKind::Container,
            "list" => NodeKind::List,
            "leaf" => NodeKind::Leaf,
            "leaf-list" => NodeKind::LeafList,
            "choice" => NodeKind::Choice,
            "case" => NodeKind::Case,
            "key" => NodeKind::Key,
            "description" => NodeKind::Description,
            "mandatory" => NodeKind::Mandatory,
            "grouping" => NodeKind::Grouping,
            "uses" => NodeKind::Uses,
            "import" => NodeKind::Import,
            "prefix" => NodeKind::Prefix,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Returns true for statements that carry fields or objects
    /// (the kinds a `uses` can splice into its parent).
    pub fn is_data_definition(&self) -> bool {
        matches!(
            self,
            NodeKind::Container
                | NodeKind::List
                | NodeKind::Leaf
                | NodeKind::LeafList
                | NodeKind::Choice
                | NodeKind::Uses
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_mapping() {
        for kind in [
            NodeKind::Module,
            NodeKind::Container,
            NodeKind::List,
            NodeKind::Leaf,
            NodeKind::LeafList,
            NodeKind::Choice,
            NodeKind::Case,
            NodeKind::Key,
            NodeKind::Description,
            NodeKind::Mandatory,
            NodeKind::Grouping,
            NodeKind::Uses,
            NodeKind::Import,
            NodeKind::Prefix,
        ] {
            assert_eq!(NodeKind::from_keyword(kind.keyword()), kind);
        }
    }

    #[test]
    fn test_unknown_keyword() {
        let kind = NodeKind::from_keyword("must");
        assert_eq!(kind, NodeKind::Other("must".into()));
        assert_eq!(kind.to_string(), "must");
    }

    #[test]
    fn test_leaf_list_keyword() {
        assert_eq!(NodeKind::LeafList.keyword(), "leaf-list");
    }
}
