// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// A finite, immutable graph stored as an adjacency list.  Nodes are the
// indices `0..n`; each node keeps its neighbors in the order supplied at
// construction, and that order is the order in which a depth-first search
// tries them.
// ──────────────────────────────────────────────────────────────────────────────

use super::error::GraphError;

/// Represents a unique identifier for a node in the graph.
pub type NodeId = usize;

/// Adjacency-list graph whose neighbor indices are validated at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Builds a graph from one neighbor list per node.
    ///
    /// # Errors
    /// Returns `GraphError::NeighborOutOfRange` if any neighbor index is not
    /// smaller than the number of nodes.
    pub fn new(adjacency: Vec<Vec<NodeId>>) -> Result<Self, GraphError> {
        let node_count = adjacency.len();
        for (node, neighbors) in adjacency.iter().enumerate() {
            if let Some(&neighbor) = neighbors.iter().find(|&&n| n >= node_count) {
                return Err(GraphError::NeighborOutOfRange {
                    node,
                    neighbor,
                    node_count,
                });
            }
        }
        Ok(Self { adjacency })
    }

    /// Builds the 4-connected `rows × cols` lattice.
    ///
    /// Cell `(row, col)` is node `row * cols + col`. Neighbors are listed up,
    /// down, left, right, skipping the ones that fall off the edge.
    pub fn lattice(rows: usize, cols: usize) -> Self {
        let mut adjacency = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut adjacent = Vec::with_capacity(4);
                if row != 0 {
                    adjacent.push((row - 1) * cols + col);
                }
                if row + 1 != rows {
                    adjacent.push((row + 1) * cols + col);
                }
                if col != 0 {
                    adjacent.push(row * cols + col - 1);
                }
                if col + 1 != cols {
                    adjacent.push(row * cols + col + 1);
                }
                adjacency.push(adjacent);
            }
        }
        // Every index above is in range by construction.
        Self { adjacency }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `node` is a valid index.
    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Returns the ordered neighbor list of `node`, or an empty slice if the
    /// node does not exist.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `to` is listed as a neighbor of `from`.
    pub fn is_adjacent(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }
}

impl AsRef<Graph> for Graph {
    fn as_ref(&self) -> &Graph {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_neighbor() {
        let err = Graph::new(vec![vec![1], vec![0, 2]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::NeighborOutOfRange {
                node: 1,
                neighbor: 2,
                node_count: 2
            }
        );
    }

    #[test]
    fn lattice_neighbor_order() {
        let graph = Graph::lattice(3, 3);
        assert_eq!(graph.node_count(), 9);
        // Centre cell: up, down, left, right.
        assert_eq!(graph.neighbors(4), &[1, 7, 3, 5]);
        // Corners only have two neighbors.
        assert_eq!(graph.neighbors(0), &[3, 1]);
        assert_eq!(graph.neighbors(8), &[5, 7]);
    }

    #[test]
    fn lattice_is_symmetric() {
        let graph = Graph::lattice(4, 5);
        for node in 0..graph.node_count() {
            for &neighbor in graph.neighbors(node) {
                assert!(graph.is_adjacent(neighbor, node));
            }
        }
    }

    #[test]
    fn empty_and_single_row() {
        assert!(Graph::lattice(0, 0).is_empty());
        let row = Graph::lattice(1, 3);
        assert_eq!(row.neighbors(1), &[0, 2]);
        assert!(row.neighbors(7).is_empty());
        assert!(!row.contains_node(3));
    }
}
