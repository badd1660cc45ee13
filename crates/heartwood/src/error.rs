//! Error types for tree construction, subtree algebra and processing

use thiserror::Error;

use crate::node::NodeId;
use crate::process::ProcessorState;

/// Main error type for Heartwood operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeartwoodError {
    /// The construction event stream was not balanced
    #[error("Malformed event stream at event {position}: {reason}")]
    MalformedStream {
        /// Zero-based index of the offending event (the stream length if it ended early)
        position: usize,
        /// What was wrong with the stream
        reason: String,
    },

    /// A structural query needed a node but the tree has none
    #[error("Tree is empty")]
    EmptyTree,

    /// A candidate subtree has no live counterpart in the target tree
    #[error(
        "No live node corresponds to {}",
        .origin
            .as_ref()
            .map_or_else(|| "an empty subtree".to_string(), |o| format!("subtree with origin {o}"))
    )]
    NotFound {
        /// Provenance tag of the candidate's root, `None` for an empty candidate
        origin: Option<NodeId>,
    },

    /// A processor method was called out of order
    #[error("Illegal workflow: cannot {operation} while processor is {state}")]
    IllegalWorkflow {
        /// The attempted operation
        operation: &'static str,
        /// The state the processor was in
        state: ProcessorState,
    },
}

impl HeartwoodError {
    /// Create a malformed stream error.
    pub fn malformed(position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedStream {
            position,
            reason: reason.into(),
        }
    }
}

/// Result type alias for Heartwood operations
pub type Result<T> = std::result::Result<T, HeartwoodError>;
