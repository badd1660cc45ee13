//! Syntax tree vertices and their identities

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique node identity.
///
/// Every node ever created gets a fresh id, including copies, so two ids
/// compare equal only when they name the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw integer value of this id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single vertex of a syntax tree.
///
/// Nodes are owned by a [`Tree`](crate::Tree) and refer to their parent and
/// children by [`NodeId`]. Equality and hashing look only at the identity,
/// never at rule or label.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    origin: NodeId,
    rule: String,
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Create a detached node with a fresh identity that is its own origin.
    pub(crate) fn new(rule: impl Into<String>, label: impl Into<String>) -> Self {
        let id = NodeId::fresh();
        Self {
            id,
            origin: id,
            rule: rule.into(),
            label: label.into(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a detached copy of `source` with a fresh identity.
    ///
    /// The copy keeps the source's provenance; structure is filled in by the caller.
    pub(crate) fn copy_from(source: &Node) -> Self {
        Self {
            id: NodeId::fresh(),
            origin: source.origin,
            rule: source.rule.clone(),
            label: source.label.clone(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// This node's identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Identity of the node this one was originally built as.
    ///
    /// Copies share the origin of their source, which is how an extracted
    /// subtree is correlated back to a live tree.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Grammar rule name.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Matched source text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Parent id, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this node has a parent.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Child ids in source order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The child at `index`, if present.
    pub fn child(&self, index: usize) -> Option<NodeId> {
        self.children.get(index).copied()
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Leftmost child, `None` for a leaf.
    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }

    /// Rightmost child, `None` for a leaf.
    pub fn last_child(&self) -> Option<NodeId> {
        self.children.last().copied()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub(crate) fn set_origin(&mut self, origin: NodeId) {
        self.origin = origin;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
