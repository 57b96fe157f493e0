//! Adapts a rectangular letter grid into a [`Graph`] plus a per-node tile
//! table.

use super::error::GraphError;
use super::graph::{Graph, NodeId};

/// The letter that stands for the two-letter Boggle tile.
const QU_LETTER: &str = "q";
const QU_TILE: &str = "qu";

/// A letter grid viewed as a 4-connected graph.
///
/// Node `row * cols + col` carries the tile of that cell. A tile is usually a
/// single lowercase letter, but `q` is stored as `"qu"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    graph: Graph,
    tiles: Vec<String>,
}

impl GridGraph {
    /// Parses a grid written as newline-separated rows.
    ///
    /// Each row is trimmed before its length is measured. A trailing newline
    /// does not start a new row.
    ///
    /// # Errors
    /// Returns `GraphError::EmptyGrid` when the text has no cells and
    /// `GraphError::JaggedGrid` when a row's length differs from the first
    /// row's.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        Self::from_rows(text.lines())
    }

    /// Builds a grid from already split rows.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut row_count = 0;
        let mut cols = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref().trim();
            let found = line.chars().count();
            if row == 0 {
                cols = found;
            } else if found != cols {
                return Err(GraphError::JaggedGrid {
                    row,
                    expected: cols,
                    found,
                });
            }
            tiles.extend(line.chars().map(tile_for));
            row_count += 1;
        }

        if tiles.is_empty() {
            return Err(GraphError::EmptyGrid);
        }

        Ok(Self {
            rows: row_count,
            cols,
            graph: Graph::lattice(row_count, cols),
            tiles,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the underlying adjacency graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the tile table, indexed by node.
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Returns the tile of `node`, if it exists.
    pub fn tile(&self, node: NodeId) -> Option<&str> {
        self.tiles.get(node).map(String::as_str)
    }

    /// Concatenates the tiles along `path`.
    pub fn letters_of(&self, path: &[NodeId]) -> String {
        spell(&self.tiles, path)
    }
}

impl AsRef<Graph> for GridGraph {
    fn as_ref(&self) -> &Graph {
        &self.graph
    }
}

/// Concatenates `tiles[node]` for each node of `path`, skipping unknown
/// nodes.
pub(crate) fn spell(tiles: &[String], path: &[NodeId]) -> String {
    let mut word = String::with_capacity(path.len() + 1);
    for tile in path.iter().filter_map(|&node| tiles.get(node)) {
        word.push_str(tile);
    }
    word
}

fn tile_for(letter: char) -> String {
    let tile: String = letter.to_lowercase().collect();
    if tile == QU_LETTER {
        QU_TILE.to_string()
    } else {
        tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases() {
        let grid = GridGraph::parse("AB\ncd\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.tiles(), &["a", "b", "c", "d"]);
        assert_eq!(grid.graph().neighbors(0), &[2, 1]);
    }

    #[test]
    fn q_becomes_qu() {
        let grid = GridGraph::parse("QI\nET").unwrap();
        assert_eq!(grid.tile(0), Some("qu"));
        assert_eq!(grid.letters_of(&[0, 1, 3]), "quit");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let grid = GridGraph::parse("  cat \n\tdog").unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.letters_of(&[3, 4, 5]), "dog");
    }

    #[test]
    fn rejects_jagged_rows() {
        assert_eq!(
            GridGraph::parse("abc\nde\nfgh").unwrap_err(),
            GraphError::JaggedGrid {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        // A blank row in the middle is jagged, not skipped.
        assert!(matches!(
            GridGraph::parse("ab\n\nab"),
            Err(GraphError::JaggedGrid { row: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(GridGraph::parse("").unwrap_err(), GraphError::EmptyGrid);
        assert_eq!(GridGraph::parse("  \n").unwrap_err(), GraphError::EmptyGrid);
    }
}
