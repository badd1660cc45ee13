//! Per-node value cache shared by processor hooks

use indexmap::IndexMap;

use crate::node::{Node, NodeId};

/// Memoized values keyed by node identity.
///
/// Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct Cache<V> {
    values: IndexMap<NodeId, V>,
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Cache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// The value stored for `id`.
    pub fn get(&self, id: NodeId) -> Option<&V> {
        self.values.get(&id)
    }

    /// Mutable access to the value stored for `id`.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.values.get_mut(&id)
    }

    /// Store a value for `id`, returning the previous one.
    pub fn insert(&mut self, id: NodeId, value: V) -> Option<V> {
        self.values.insert(id, value)
    }

    /// Remove the value stored for `id`.
    pub fn remove(&mut self, id: NodeId) -> Option<V> {
        self.values.shift_remove(&id)
    }

    /// Whether a value is stored for `id`.
    pub fn contains(&self, id: NodeId) -> bool {
        self.values.contains_key(&id)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &V)> + '_ {
        self.values.iter().map(|(id, value)| (*id, value))
    }
}

impl<V: Clone> Cache<V> {
    /// Pass-through rule for chain productions.
    ///
    /// If `node` has exactly one child with a cached value, that value is
    /// copied to `node`. Returns whether a value was written.
    pub fn propagate_single_child(&mut self, node: &Node) -> bool {
        if node.child_count() != 1 {
            return false;
        }
        let Some(value) = node
            .first_child()
            .and_then(|child| self.values.get(&child))
            .cloned()
        else {
            return false;
        };
        self.values.insert(node.id(), value);
        true
    }
}
