//! The owning syntax tree and its node registry

mod display;
mod subtree;
mod walk;

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::builder::{Event, TreeBuilder};
use crate::error::{HeartwoodError, Result};
use crate::node::{Node, NodeId};

/// A rooted, mutable syntax tree.
///
/// The tree owns every node through a flat registry kept in insertion
/// order. The registry always holds exactly the nodes reachable from the
/// root, so a [`NodeId`] that was removed simply stops resolving.
///
/// # Example
///
/// ```
/// use heartwood::{Event, Tree};
///
/// let tree = Tree::from_events([
///     Event::enter("expression", "1+2"),
///     Event::enter("number", "1"),
///     Event::Exit,
///     Event::enter("operator", "+"),
///     Event::Exit,
///     Event::enter("number", "2"),
///     Event::Exit,
///     Event::Exit,
/// ])
/// .unwrap();
///
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.leaves().count(), 3);
/// assert_eq!(tree.root().unwrap().label(), "1+2");
/// ```
#[derive(Debug, Default)]
pub struct Tree {
    /// Optional name for the tree as a whole
    name: Option<String>,

    /// All live nodes, in insertion order
    nodes: IndexMap<NodeId, Node>,

    /// Provenance index: origin tag -> live node carrying it
    origins: HashMap<NodeId, NodeId>,

    root: Option<NodeId>,
}

impl Tree {
    /// Create a tree with no nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a single-node tree.
    pub fn leaf(rule: impl Into<String>, label: impl Into<String>) -> Self {
        let node = Node::new(rule, label);
        let id = node.id();
        let mut nodes = IndexMap::with_capacity(1);
        nodes.insert(id, node);
        Self::from_registry(nodes, Some(id))
    }

    /// Build a tree from a balanced stream of construction events.
    ///
    /// An empty stream yields an empty tree.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Result<Self> {
        let mut builder = TreeBuilder::new();
        for event in events {
            builder.apply(event)?;
        }
        builder.finish()
    }

    /// Deep-copy `other`.
    ///
    /// The copy has the same shape, rules and labels, but every node gets a
    /// new identity. Provenance is kept, so subtrees extracted from `other`
    /// can still be located in the copy.
    pub fn copy_of(other: &Tree) -> Self {
        let mut copy = match other.root {
            Some(root) => other.copy_subtree(root),
            None => Self::empty(),
        };
        copy.name = other.name.clone();
        copy
    }

    pub(crate) fn from_registry(nodes: IndexMap<NodeId, Node>, root: Option<NodeId>) -> Self {
        let origins = nodes
            .values()
            .map(|node| (node.origin(), node.id()))
            .collect();
        Self {
            name: None,
            nodes,
            origins,
            root,
        }
    }

    /// Copy the subtree rooted at `start` into a new, independent tree.
    ///
    /// Nodes are registered in pre-order.
    pub(crate) fn copy_subtree(&self, start: NodeId) -> Self {
        let order = self.pre_order_from(start);
        let mut copies: IndexMap<NodeId, Node> = IndexMap::with_capacity(order.len());
        let mut mapped: HashMap<NodeId, NodeId> = HashMap::with_capacity(order.len());

        for id in order {
            let Some(source) = self.nodes.get(&id) else {
                continue;
            };
            let mut copy = Node::copy_from(source);
            let copy_id = copy.id();

            let parent = source
                .parent()
                .filter(|_| id != start)
                .and_then(|parent| mapped.get(&parent).copied());
            if let Some(parent) = parent {
                copy.set_parent(Some(parent));
                if let Some(parent) = copies.get_mut(&parent) {
                    parent.children_mut().push(copy_id);
                }
            }

            mapped.insert(id, copy_id);
            copies.insert(copy_id, copy);
        }

        let root = mapped.get(&start).copied();
        Self::from_registry(copies, root)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Metadata
    // ═══════════════════════════════════════════════════════════════════

    /// The tree's name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the tree's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the tree's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    // ═══════════════════════════════════════════════════════════════════
    // Registry Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// All node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// All nodes without children, in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values().filter(|node| node.is_leaf())
    }

    /// Look up a live node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Whether `id` names a live node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// The node with no parent.
    pub fn root(&self) -> Result<&Node> {
        self.root
            .and_then(|id| self.nodes.get(&id))
            .ok_or(HeartwoodError::EmptyTree)
    }

    /// Id of the root node, `None` for an empty tree.
    pub fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    // ═══════════════════════════════════════════════════════════════════
    // Navigation
    // ═══════════════════════════════════════════════════════════════════

    /// The parent of `id`.
    pub fn parent_of(&self, id: NodeId) -> Option<&Node> {
        self.node(id)
            .and_then(Node::parent)
            .and_then(|parent| self.node(parent))
    }

    /// The children of `id`, left to right.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.node(id)
            .map(Node::children)
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.node(*child))
    }

    /// The child of `id` at `index`.
    pub fn child_of(&self, id: NodeId, index: usize) -> Option<&Node> {
        self.node(id)
            .and_then(|node| node.child(index))
            .and_then(|child| self.node(child))
    }
}
