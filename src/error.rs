//! Error types shared by the graph and its traversals.

use crate::graph::NodeId;

/// Errors reported by [`DiGraph`](crate::DiGraph) operations.
///
/// Cycles are never reported through this type; they surface as
/// [`Visitor::back_edge`](crate::Visitor::back_edge) callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node id at or past `number_of_nodes()` was supplied.
    #[error("node id {id} out of range for graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending id.
        id: NodeId,
        /// Number of nodes in the graph when the call was made.
        node_count: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
