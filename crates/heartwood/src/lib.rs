//! # Heartwood
//!
//! A mutable syntax tree and a bottom-up evaluation engine.
//!
//! A parser front end reports the rules it enters and leaves as a stream of
//! [`Event`]s. Heartwood builds an owned [`Tree`] from that stream and lets
//! callers inspect, copy, search, cut and graft subtrees, render the result
//! as a Graphviz graph, and compute per-node values children-first.
//!
//! ## Architecture
//!
//! - **Nodes**: identity-bearing vertices with a rule name and a text label
//! - **Tree**: owns all nodes in a flat, insertion-ordered registry
//! - **Subtree algebra**: copy-out extraction with provenance, removal, replacement
//! - **Graph output**: DOT text for external rendering
//! - **Processor**: post-order traversal with a shared value cache
//!
//! ## Example
//!
//! ```
//! use heartwood::{Event, Tree};
//!
//! let mut tree = Tree::from_events([
//!     Event::enter("call", "f(x)"),
//!     Event::enter("name", "f"),
//!     Event::Exit,
//!     Event::enter("argument", "x"),
//!     Event::Exit,
//!     Event::Exit,
//! ])
//! .unwrap();
//!
//! let arguments = tree.find_subtrees(|node| node.rule() == "argument");
//! tree.replace_subtree(&arguments[0], &Tree::leaf("argument", "y")).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert!(tree.to_dot().contains("argument: y"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod config;
pub mod error;
pub mod graph;
pub mod node;
pub mod process;
pub mod tree;

// Re-export main types
pub use builder::{Event, TreeBuilder};
pub use config::{DotConfig, ProcessConfig};
pub use error::{HeartwoodError, Result};
pub use graph::{escape_label, to_dot, to_dot_with, write_dot};
pub use node::{Node, NodeId};
pub use process::{evaluate, Cache, Process, Processor, ProcessorState};
pub use tree::Tree;

/// Heartwood version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
