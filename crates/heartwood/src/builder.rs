//! Tree construction from enter/exit events
//!
//! A parser front end walks its parse tree and reports every rule it enters
//! and leaves. [`TreeBuilder`] turns that stream into a [`Tree`]:
//!
//! ```text
//! Enter(s, "3+100")
//!   Enter(expression, "3+100")
//!     ...
//!   Exit
//! Exit
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{HeartwoodError, Result};
use crate::node::{Node, NodeId};
use crate::tree::Tree;

/// A single construction event.
///
/// Serialized as `{"event": "enter", "rule": "...", "label": "..."}` or
/// `{"event": "exit"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Open a node as the next child of the innermost open node
    Enter {
        /// Grammar rule name
        rule: String,
        /// Matched source text
        #[serde(default)]
        label: String,
    },

    /// Close the innermost open node
    Exit,
}

impl Event {
    /// Create an `Enter` event.
    pub fn enter(rule: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Enter {
            rule: rule.into(),
            label: label.into(),
        }
    }
}

/// Incremental builder for a [`Tree`].
///
/// Nodes are registered in the order they are entered, so a freshly built
/// tree lists its nodes in pre-order.
///
/// # Example
///
/// ```
/// use heartwood::TreeBuilder;
///
/// let mut builder = TreeBuilder::new();
/// builder.enter("sum", "1+2");
/// builder.enter("number", "1");
/// builder.exit().unwrap();
/// builder.exit().unwrap();
///
/// let tree = builder.finish().unwrap();
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.root().unwrap().rule(), "sum");
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: IndexMap<NodeId, Node>,
    opened: Vec<NodeId>,
    root: Option<NodeId>,
    /// Number of events consumed so far
    position: usize,
    /// Position of the first top-level enter after the root closed
    overflow: Option<usize>,
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a node under the innermost open node and return its id.
    ///
    /// Entering a second top-level node after the root was closed is
    /// recorded and reported by [`finish`](Self::finish).
    pub fn enter(&mut self, rule: impl Into<String>, label: impl Into<String>) -> NodeId {
        let position = self.position;
        self.position += 1;

        let mut node = Node::new(rule, label);
        let id = node.id();

        match self.opened.last().copied() {
            Some(parent) => {
                node.set_parent(Some(parent));
                if let Some(parent) = self.nodes.get_mut(&parent) {
                    parent.children_mut().push(id);
                }
            }
            None if self.root.is_none() => self.root = Some(id),
            None => {
                self.overflow.get_or_insert(position);
            }
        }

        self.nodes.insert(id, node);
        self.opened.push(id);
        id
    }

    /// Close the innermost open node.
    pub fn exit(&mut self) -> Result<()> {
        let position = self.position;
        self.position += 1;
        self.opened
            .pop()
            .map(|_| ())
            .ok_or_else(|| HeartwoodError::malformed(position, "exit without a matching enter"))
    }

    /// Apply a single event.
    pub fn apply(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Enter { rule, label } => {
                self.enter(rule, label);
                Ok(())
            }
            Event::Exit => self.exit(),
        }
    }

    /// Number of currently open nodes.
    pub fn depth(&self) -> usize {
        self.opened.len()
    }

    /// Finish building.
    ///
    /// Fails if any node is still open or if the stream had more than one
    /// top-level node. No partial tree is returned on failure.
    pub fn finish(self) -> Result<Tree> {
        if let Some(position) = self.overflow {
            return Err(HeartwoodError::malformed(
                position,
                "enter after the root node was closed",
            ));
        }
        if !self.opened.is_empty() {
            return Err(HeartwoodError::malformed(
                self.position,
                format!("{} node(s) still open at end of stream", self.opened.len()),
            ));
        }

        tracing::debug!(nodes = self.nodes.len(), "built tree from event stream");
        Ok(Tree::from_registry(self.nodes, self.root))
    }
}
