use crate::graph::NodeId;
use thiserror::Error;

// Error type for path enumeration entry points.
//
// Predicate failures are not part of this type: they surface through the
// iterator with the predicate's own error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start node is not a node of the graph.
    #[error("Start node {start} is out of range for a graph of {node_count} nodes")]
    StartOutOfRange { start: NodeId, node_count: usize },

    /// The finish node is not a node of the graph.
    #[error("Finish node {finish} is out of range for a graph of {node_count} nodes")]
    FinishOutOfRange { finish: NodeId, node_count: usize },
}
