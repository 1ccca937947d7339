//! Grouping expansion.
//!
//! Modules factor shared fields into `grouping` statements and pull them into
//! containers, lists and cases with `uses`. Expansion works on a copy of the
//! module: every `uses` is replaced by the data definitions of its grouping,
//! appended after the node's own children of the same tag.

use cfgen_schema::{NodeKind, SchemaNode, as_sequence};
use tracing::debug;

use crate::module::find_module;

/// Statements a grouping contributes to the node that uses it.
const SPLICED: [NodeKind; 5] = [
    NodeKind::Leaf,
    NodeKind::LeafList,
    NodeKind::Choice,
    NodeKind::Container,
    NodeKind::List,
];

/// A module with its `uses` statements expanded.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// The expanded copy of the module.
    pub module: SchemaNode,
    /// `uses` statements that were dropped.
    pub unresolved: Vec<UnresolvedUses>,
}

/// A `uses` that could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedUses {
    /// The grouping reference as written (possibly `prefix:name`).
    pub grouping: String,
    /// Dotted path of the node holding the `uses`.
    pub location: String,
    pub reason: UnresolvedReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// No grouping with that name is visible.
    NotFound,
    /// The grouping (indirectly) uses itself.
    Cycle,
}

impl UnresolvedUses {
    pub fn message(&self) -> String {
        match self.reason {
            UnresolvedReason::NotFound => format!("grouping '{}' not found", self.grouping),
            UnresolvedReason::Cycle => format!("grouping '{}' uses itself", self.grouping),
        }
    }
}

/// Expand every `uses` in `module`, resolving groupings against `modules`.
///
/// A grouping's own `uses` resolve in the module that declares the grouping.
pub fn expand_uses(module: &SchemaNode, modules: &[SchemaNode]) -> Expansion {
    let resolver = Resolver { modules };
    let mut expanded = module.clone();
    let mut state = State::default();

    let root = module.name().unwrap_or_default().to_string();
    resolver.expand(&mut expanded, module, &root, &mut state);

    Expansion {
        module: expanded,
        unresolved: state.unresolved,
    }
}

#[derive(Default)]
struct State {
    /// Groupings currently being expanded, as `module:name`.
    active: Vec<String>,
    unresolved: Vec<UnresolvedUses>,
}

struct Resolver<'a> {
    modules: &'a [SchemaNode],
}

impl<'a> Resolver<'a> {
    /// Expand `node`, resolving references in `scope`.
    fn expand(&self, node: &mut SchemaNode, scope: &'a SchemaNode, path: &str, state: &mut State) {
        for uses in node.take_children(&NodeKind::Uses) {
            let reference = uses.name().unwrap_or_default();
            let Some((owner, grouping)) = self.lookup(scope, reference) else {
                self.unresolved(reference, path, UnresolvedReason::NotFound, state);
                continue;
            };

            let identity = format!(
                "{}:{}",
                owner.name().unwrap_or_default(),
                grouping.name().unwrap_or_default()
            );
            if state.active.contains(&identity) {
                self.unresolved(reference, path, UnresolvedReason::Cycle, state);
                continue;
            }

            let mut body = grouping.clone();
            state.active.push(identity);
            self.expand(&mut body, owner, path, state);
            state.active.pop();

            for kind in &SPLICED {
                for spliced in body.take_children(kind) {
                    node.push_child(spliced);
                }
            }
        }

        for child in node.children_mut() {
            if child.kind() == &NodeKind::Grouping {
                continue;
            }
            let child_path = match child.name() {
                Some(name) => format!("{}.{}", path, name),
                None => path.to_string(),
            };
            self.expand(child, scope, &child_path, state);
        }
    }

    fn unresolved(&self, reference: &str, path: &str, reason: UnresolvedReason, state: &mut State) {
        let issue = UnresolvedUses {
            grouping: reference.to_string(),
            location: path.to_string(),
            reason,
        };
        debug!(location = path, "{}; dropping uses", issue.message());
        state.unresolved.push(issue);
    }

    /// Find a grouping visible from `scope`, with the module that declares it.
    fn lookup(
        &self,
        scope: &'a SchemaNode,
        reference: &str,
    ) -> Option<(&'a SchemaNode, &'a SchemaNode)> {
        let (prefix, name) = match reference.split_once(':') {
            Some((prefix, name)) => (Some(prefix), name),
            None => (None, reference),
        };

        let own_prefix = scope.first(&NodeKind::Prefix).and_then(SchemaNode::value);
        let candidates: Vec<&'a SchemaNode> = match prefix {
            None => vec![scope],
            Some(prefix) if Some(prefix) == own_prefix => vec![scope],
            Some(prefix) => match self.imported(scope, prefix) {
                Some(module) => vec![module],
                None => self.modules.iter().collect(),
            },
        };

        candidates.into_iter().find_map(|module| {
            as_sequence(module.child(&NodeKind::Grouping))
                .iter()
                .find(|g| g.name() == Some(name))
                .map(|g| (module, g))
        })
    }

    /// The loaded module that `scope` imports under `prefix`.
    fn imported(&self, scope: &SchemaNode, prefix: &str) -> Option<&'a SchemaNode> {
        as_sequence(scope.child(&NodeKind::Import))
            .iter()
            .find(|import| {
                import.first(&NodeKind::Prefix).and_then(SchemaNode::value) == Some(prefix)
            })
            .and_then(|import| import.attr("module"))
            .and_then(|name| find_module(self.modules, name))
    }
}
