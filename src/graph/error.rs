use super::NodeId;
use thiserror::Error;

/// Error type for graph and grid construction.
///
/// Every variant is a precondition failure detected before any traversal
/// starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node lists a neighbor that is not a valid node index.
    #[error("Node {node} lists neighbor {neighbor}, but the graph only has {node_count} nodes")]
    NeighborOutOfRange {
        node: NodeId,
        neighbor: NodeId,
        node_count: usize,
    },

    /// The grid text contained no cells.
    #[error("Grid is empty")]
    EmptyGrid,

    /// A grid row does not have the same length as the first row.
    #[error("Jagged grid: row {row} has {found} cells, expected {expected}")]
    JaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}
