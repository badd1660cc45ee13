//! Subtree algebra: extraction, search, containment, removal and replacement
//!
//! Extracted subtrees are always copies. Each copied node keeps the origin
//! tag of the node it was copied from, and that tag is how a candidate is
//! matched back to a live node in [`Tree::get_subtree`], [`Tree::remove_subtree`]
//! and [`Tree::replace_subtree`].

use std::collections::HashSet;

use indexmap::IndexMap;

use super::Tree;
use crate::error::{HeartwoodError, Result};
use crate::node::{Node, NodeId};

impl Tree {
    /// Copy the subtree rooted at `id` into its own tree.
    pub fn extract(&self, id: NodeId) -> Option<Tree> {
        self.contains(id).then(|| self.copy_subtree(id))
    }

    /// Every node matching `predicate`, each copied out as its own tree.
    ///
    /// Results are in registry order. Nested matches are all reported.
    pub fn find_subtrees<F>(&self, predicate: F) -> Vec<Tree>
    where
        F: Fn(&Node) -> bool,
    {
        self.nodes
            .values()
            .filter(|node| predicate(node))
            .map(|node| self.copy_subtree(node.id()))
            .collect()
    }

    /// Like [`find_subtrees`](Self::find_subtrees), but drops any match that
    /// has a matching ancestor, keeping only the outermost ones.
    pub fn find_dominating_subtrees<F>(&self, predicate: F) -> Vec<Tree>
    where
        F: Fn(&Node) -> bool,
    {
        let matches: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|node| predicate(node))
            .map(Node::id)
            .collect();
        let matched: HashSet<NodeId> = matches.iter().copied().collect();

        matches
            .into_iter()
            .filter(|&id| !self.ancestors(id).any(|ancestor| matched.contains(&ancestor)))
            .map(|id| self.copy_subtree(id))
            .collect()
    }

    /// The live node `candidate` was extracted from, if it is still here.
    pub fn get_subtree(&self, candidate: &Tree) -> Option<&Node> {
        let origin = candidate.root().ok()?.origin();
        self.origins.get(&origin).and_then(|id| self.nodes.get(id))
    }

    /// Whether `candidate` has a live counterpart in this tree.
    pub fn has_subtree(&self, candidate: &Tree) -> bool {
        self.get_subtree(candidate).is_some()
    }

    fn locate(&self, candidate: &Tree) -> Result<NodeId> {
        let origin = candidate.root().ok().map(Node::origin);
        origin
            .and_then(|origin| self.origins.get(&origin).copied())
            .ok_or(HeartwoodError::NotFound { origin })
    }

    /// Cut the live counterpart of `candidate` out of this tree.
    ///
    /// The excised nodes keep their identities and are handed back as a
    /// tree of their own. Removing the root leaves this tree empty.
    pub fn remove_subtree(&mut self, candidate: &Tree) -> Result<Tree> {
        let target = self.locate(candidate)?;
        let removed = self.detach(target);
        tracing::debug!(
            node = %target,
            removed = removed.len(),
            remaining = self.len(),
            "removed subtree"
        );
        Ok(removed)
    }

    /// Replace the live counterpart of `candidate` with a copy of `replacement`.
    ///
    /// The copy takes the old subtree's place among its siblings, or becomes
    /// the new root. `replacement` is left untouched and can be reused.
    /// Grafted nodes keep the replacement's provenance unless that origin is
    /// still live in this tree, in which case they start a fresh one.
    pub fn replace_subtree(&mut self, candidate: &Tree, replacement: &Tree) -> Result<()> {
        let target = self.locate(candidate)?;
        let graft = replacement.copy_subtree(replacement.root()?.id());

        let parent = self.nodes.get(&target).and_then(Node::parent);
        let position = parent
            .and_then(|parent| self.nodes.get(&parent))
            .and_then(|parent| parent.children().iter().position(|&child| child == target));

        let removed = self.detach(target);

        let Tree {
            nodes: grafted,
            root: graft_root,
            ..
        } = graft;
        let added = grafted.len();
        for (id, mut node) in grafted {
            if self.origins.contains_key(&node.origin()) {
                node.set_origin(id);
            }
            if Some(id) == graft_root {
                node.set_parent(parent);
            }
            self.origins.insert(node.origin(), id);
            self.nodes.insert(id, node);
        }

        match (parent, position, graft_root) {
            (Some(parent), Some(position), Some(graft_root)) => {
                if let Some(parent) = self.nodes.get_mut(&parent) {
                    parent.children_mut().insert(position, graft_root);
                }
            }
            _ => self.root = graft_root,
        }

        tracing::debug!(
            node = %target,
            removed = removed.len(),
            added,
            "replaced subtree"
        );
        Ok(())
    }

    /// Unlink `target` from its parent and move its subtree out of the registry.
    fn detach(&mut self, target: NodeId) -> Tree {
        match self.nodes.get(&target).and_then(Node::parent) {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(&parent) {
                    parent.children_mut().retain(|&child| child != target);
                }
            }
            None => self.root = None,
        }

        let doomed: HashSet<NodeId> = self.pre_order_from(target).into_iter().collect();
        let registry = std::mem::take(&mut self.nodes);
        let (mut excised, kept): (IndexMap<NodeId, Node>, IndexMap<NodeId, Node>) =
            registry.into_iter().partition(|(id, _)| doomed.contains(id));
        self.nodes = kept;

        for node in excised.values() {
            self.origins.remove(&node.origin());
        }
        if let Some(root) = excised.get_mut(&target) {
            root.set_parent(None);
        }

        Tree::from_registry(excised, Some(target))
    }
}
