//! Traversal orders and ancestry queries
//!
//! All walks use an explicit stack, so tree depth is bounded only by memory.

use super::Tree;
use crate::node::{Node, NodeId};

impl Tree {
    /// Every node id in pre-order (parent first, children left to right).
    pub fn pre_order(&self) -> Vec<NodeId> {
        self.root
            .map(|root| self.pre_order_from(root))
            .unwrap_or_default()
    }

    /// The subtree rooted at `start` in pre-order, `start` included.
    pub fn pre_order_from(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            order.push(id);
            stack.extend(node.children().iter().rev());
        }
        order
    }

    /// Every node id in post-order (children left to right, then parent).
    pub fn post_order(&self) -> Vec<NodeId> {
        self.root
            .map(|root| self.post_order_from(root))
            .unwrap_or_default()
    }

    /// The subtree rooted at `start` in post-order, `start` last.
    pub fn post_order_from(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        // (node, children already pushed)
        let mut stack = vec![(start, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            stack.push((id, true));
            stack.extend(node.children().iter().rev().map(|&child| (child, false)));
        }
        order
    }

    /// Proper descendants of `id` in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = self.pre_order_from(id);
        if !order.is_empty() {
            order.remove(0);
        }
        order
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.node(id).and_then(Node::parent);
        std::iter::successors(first, move |&current| self.node(current).and_then(Node::parent))
    }

    /// Whether `ancestor` lies strictly above `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|current| current == ancestor)
    }

    /// Number of edges between `id` and the root.
    pub fn depth_of(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Event, Tree};

    // a(b(d, e), c)
    fn sample() -> Tree {
        Tree::from_events([
            Event::enter("a", ""),
            Event::enter("b", ""),
            Event::enter("d", ""),
            Event::Exit,
            Event::enter("e", ""),
            Event::Exit,
            Event::Exit,
            Event::enter("c", ""),
            Event::Exit,
            Event::Exit,
        ])
        .unwrap()
    }

    fn rules(tree: &Tree, ids: &[crate::NodeId]) -> Vec<String> {
        ids.iter()
            .map(|id| tree.node(*id).unwrap().rule().to_string())
            .collect()
    }

    #[test]
    fn test_pre_order() {
        let tree = sample();
        assert_eq!(rules(&tree, &tree.pre_order()), ["a", "b", "d", "e", "c"]);
    }

    #[test]
    fn test_post_order() {
        let tree = sample();
        assert_eq!(rules(&tree, &tree.post_order()), ["d", "e", "b", "c", "a"]);
    }

    #[test]
    fn test_empty_walks() {
        let tree = Tree::empty();
        assert!(tree.pre_order().is_empty());
        assert!(tree.post_order().is_empty());
    }

    #[test]
    fn test_ancestors_and_depth() {
        let tree = sample();
        let order = tree.pre_order();
        let (a, b, d, c) = (order[0], order[1], order[2], order[4]);

        assert_eq!(tree.ancestors(d).collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(tree.depth_of(d), 2);
        assert_eq!(tree.depth_of(a), 0);
        assert!(tree.is_ancestor(a, d));
        assert!(!tree.is_ancestor(c, d));
        assert!(!tree.is_ancestor(d, d));
    }

    #[test]
    fn test_descendants() {
        let tree = sample();
        let b = tree.pre_order()[1];
        assert_eq!(rules(&tree, &tree.descendants(b)), ["d", "e"]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth = 100_000;
        let mut events = Vec::with_capacity(depth * 2);
        events.extend((0..depth).map(|_| Event::enter("nested", "")));
        events.extend((0..depth).map(|_| Event::Exit));
        let tree = Tree::from_events(events).unwrap();

        assert_eq!(tree.post_order().len(), depth);
        assert_eq!(tree.pre_order().len(), depth);
    }
}
