//! Bottom-up attribute evaluation
//!
//! A [`Processor`] walks a [`Tree`] once in post-order and hands every node
//! to caller-supplied [`Process`] hooks together with a shared [`Cache`].
//! Because children are always visited before their parent, a hook can read
//! its children's results from the cache and store its own.
//!
//! ```text
//! Uninitialized --run()--> Processing --> Done
//! ```
//!
//! # Example
//!
//! ```
//! use heartwood::{Cache, Event, Node, Process, Processor, Tree};
//!
//! /// Counts the nodes of every subtree.
//! struct Size;
//!
//! impl Process<usize> for Size {
//!     type Output = Option<usize>;
//!
//!     fn process(&mut self, _tree: &Tree, node: &Node, cache: &mut Cache<usize>) {
//!         let below: usize = node.children().iter().filter_map(|c| cache.get(*c)).sum();
//!         cache.insert(node.id(), below + 1);
//!     }
//!
//!     fn result(&self, tree: &Tree, cache: &Cache<usize>) -> Self::Output {
//!         cache.get(tree.root_id()?).copied()
//!     }
//! }
//!
//! let tree = Tree::from_events([
//!     Event::enter("pair", ""),
//!     Event::enter("a", ""),
//!     Event::Exit,
//!     Event::enter("b", ""),
//!     Event::Exit,
//!     Event::Exit,
//! ])
//! .unwrap();
//!
//! let mut processor = Processor::new(&tree, Size);
//! processor.run().unwrap();
//! assert_eq!(processor.result().unwrap(), Some(3));
//! ```

mod cache;

pub use cache::Cache;

use std::fmt;

use crate::config::ProcessConfig;
use crate::error::{HeartwoodError, Result};
use crate::node::{Node, NodeId};
use crate::tree::Tree;

/// Lifecycle of a [`Processor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    /// Created, `run` not yet called
    Uninitialized,

    /// Inside `run`
    Processing,

    /// `run` finished; results can be read
    Done,
}

impl fmt::Display for ProcessorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Processing => "processing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Domain logic plugged into a [`Processor`].
pub trait Process<V> {
    /// What [`result`](Process::result) produces.
    type Output;

    /// Seed the cache before any node is visited. Called exactly once.
    fn initialize(&mut self, tree: &Tree, cache: &mut Cache<V>) {
        let _ = (tree, cache);
    }

    /// Compute the value for `node`.
    ///
    /// Called exactly once per node, after all of its children. The value
    /// for `node` is expected to be in the cache when this returns.
    fn process(&mut self, tree: &Tree, node: &Node, cache: &mut Cache<V>);

    /// Extract the final answer from the filled cache.
    fn result(&self, tree: &Tree, cache: &Cache<V>) -> Self::Output;
}

/// Post-order evaluation engine bound to a single tree.
pub struct Processor<'t, V, P> {
    tree: &'t Tree,
    hooks: P,
    cache: Cache<V>,
    state: ProcessorState,
    /// Nodes in the order `process` saw them
    visits: Vec<NodeId>,
    config: ProcessConfig,
}

impl<'t, V, P> Processor<'t, V, P>
where
    P: Process<V>,
{
    /// Create a processor over `tree`.
    pub fn new(tree: &'t Tree, hooks: P) -> Self {
        Self::with_config(tree, hooks, ProcessConfig::default())
    }

    /// Create a processor with explicit configuration.
    pub fn with_config(tree: &'t Tree, hooks: P, config: ProcessConfig) -> Self {
        Self {
            tree,
            hooks,
            cache: Cache::new(),
            state: ProcessorState::Uninitialized,
            visits: Vec::new(),
            config,
        }
    }

    /// Run `initialize`, then `process` for every node in post-order.
    ///
    /// Can only be called once.
    pub fn run(&mut self) -> Result<()> {
        if self.state != ProcessorState::Uninitialized {
            return Err(HeartwoodError::IllegalWorkflow {
                operation: "run",
                state: self.state,
            });
        }
        let tree = self.tree;
        self.state = ProcessorState::Processing;
        tracing::debug!(nodes = tree.len(), "starting bottom-up run");

        self.hooks.initialize(tree, &mut self.cache);

        let order = tree.post_order();
        self.visits.reserve(order.len());
        for id in order {
            let Some(node) = tree.node(id) else {
                continue;
            };
            if self.config.trace {
                tracing::trace!(node = %id, rule = node.rule(), "visit");
            }
            self.hooks.process(tree, node, &mut self.cache);
            self.visits.push(id);
        }

        self.state = ProcessorState::Done;
        tracing::debug!(
            visited = self.visits.len(),
            cached = self.cache.len(),
            "finished bottom-up run"
        );
        Ok(())
    }

    /// The caller's final value. Only available once `run` has finished.
    pub fn result(&self) -> Result<P::Output> {
        self.ensure_done("read the result")?;
        Ok(self.hooks.result(self.tree, &self.cache))
    }

    /// Consume the processor and keep the filled cache.
    pub fn into_cache(self) -> Result<Cache<V>> {
        self.ensure_done("take the cache")?;
        Ok(self.cache)
    }

    fn ensure_done(&self, operation: &'static str) -> Result<()> {
        if self.state == ProcessorState::Done {
            Ok(())
        } else {
            Err(HeartwoodError::IllegalWorkflow {
                operation,
                state: self.state,
            })
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProcessorState {
        self.state
    }

    /// The tree this processor is bound to.
    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    /// The filled cache. Only available once `run` has finished.
    pub fn cache(&self) -> Result<&Cache<V>> {
        self.ensure_done("read the cache")?;
        Ok(&self.cache)
    }

    /// The hooks.
    pub fn hooks(&self) -> &P {
        &self.hooks
    }

    /// Node ids in the order they were processed.
    pub fn visit_order(&self) -> Result<&[NodeId]> {
        self.ensure_done("read the visit order")?;
        Ok(&self.visits)
    }
}

/// Run `hooks` over `tree` and return the result.
pub fn evaluate<V, P>(tree: &Tree, hooks: P) -> Result<P::Output>
where
    P: Process<V>,
{
    let mut processor = Processor::new(tree, hooks);
    processor.run()?;
    processor.result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Event;

    /// Records labels in visit order and counts initialize calls.
    #[derive(Default)]
    struct Recorder {
        initialized: usize,
        seen: Vec<String>,
    }

    impl Process<()> for Recorder {
        type Output = Vec<String>;

        fn initialize(&mut self, _tree: &Tree, _cache: &mut Cache<()>) {
            self.initialized += 1;
        }

        fn process(&mut self, _tree: &Tree, node: &Node, cache: &mut Cache<()>) {
            self.seen.push(node.label().to_string());
            cache.insert(node.id(), ());
        }

        fn result(&self, _tree: &Tree, _cache: &Cache<()>) -> Self::Output {
            self.seen.clone()
        }
    }

    fn sample() -> Tree {
        Tree::from_events([
            Event::enter("r", "r"),
            Event::enter("x", "a"),
            Event::enter("y", "a1"),
            Event::Exit,
            Event::Exit,
            Event::enter("x", "b"),
            Event::Exit,
            Event::Exit,
        ])
        .unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let tree = sample();
        let mut processor = Processor::new(&tree, Recorder::default());
        assert_eq!(processor.state(), ProcessorState::Uninitialized);
        processor.run().unwrap();
        assert_eq!(processor.state(), ProcessorState::Done);
        assert_eq!(processor.hooks().initialized, 1);
    }

    #[test]
    fn test_visits_in_post_order() {
        let tree = sample();
        let mut processor = Processor::new(&tree, Recorder::default());
        processor.run().unwrap();
        assert_eq!(processor.result().unwrap(), ["a1", "a", "b", "r"]);
        assert_eq!(processor.visit_order().unwrap(), tree.post_order().as_slice());
    }

    #[test]
    fn test_result_before_run() {
        let tree = sample();
        let processor = Processor::new(&tree, Recorder::default());
        let err = processor.result().unwrap_err();
        assert_eq!(
            err,
            HeartwoodError::IllegalWorkflow {
                operation: "read the result",
                state: ProcessorState::Uninitialized,
            }
        );
    }

    #[test]
    fn test_cache_and_visits_before_run() {
        let tree = sample();
        let processor = Processor::new(&tree, Recorder::default());
        assert!(matches!(
            processor.cache(),
            Err(HeartwoodError::IllegalWorkflow {
                operation: "read the cache",
                state: ProcessorState::Uninitialized,
            })
        ));
        assert!(matches!(
            processor.visit_order(),
            Err(HeartwoodError::IllegalWorkflow {
                operation: "read the visit order",
                state: ProcessorState::Uninitialized,
            })
        ));
    }

    #[test]
    fn test_run_twice() {
        let tree = sample();
        let mut processor = Processor::new(&tree, Recorder::default());
        processor.run().unwrap();
        let err = processor.run().unwrap_err();
        assert!(matches!(
            err,
            HeartwoodError::IllegalWorkflow {
                operation: "run",
                state: ProcessorState::Done,
            }
        ));
        assert_eq!(processor.hooks().seen.len(), 4);
    }

    #[test]
    fn test_into_cache() {
        let tree = sample();
        let processor = Processor::new(&tree, Recorder::default());
        assert!(processor.into_cache().is_err());

        let mut processor = Processor::new(&tree, Recorder::default());
        processor.run().unwrap();
        assert_eq!(processor.into_cache().unwrap().len(), tree.len());
    }

    #[test]
    fn test_empty_tree_runs() {
        let tree = Tree::empty();
        let seen = evaluate(&tree, Recorder::default()).unwrap();
        assert!(seen.is_empty());
    }

    #[test]
    fn test_traced_run() {
        let tree = sample();
        let mut processor =
            Processor::with_config(&tree, Recorder::default(), ProcessConfig::traced());
        processor.run().unwrap();
        assert_eq!(processor.visit_order().unwrap().len(), 4);
    }
}
