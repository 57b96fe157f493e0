//! Finds every dictionary word traceable as a path of adjacent grid cells.

use rayon::prelude::*;
use std::iter::FusedIterator;

use super::error::SolveError;
use super::predicate::{ExactWord, FeasiblePrefix};
use crate::dictionary::PrefixIndex;
use crate::graph::{GridGraph, NodeId};
use crate::path::PathEnumerator;

/// Runs one path enumeration per grid cell, pruned by prefix feasibility and
/// accepting exact dictionary words.
///
/// A word is produced once per distinct path that spells it; callers that
/// want unique words deduplicate the output themselves.
#[derive(Debug, Clone, Copy)]
pub struct WordSearchSolver<'i> {
    index: &'i PrefixIndex,
}

/// One accepted walk: the word and the cells that spell it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub word: String,
    pub path: Vec<NodeId>,
}

impl<'i> WordSearchSolver<'i> {
    pub fn new(index: &'i PrefixIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'i PrefixIndex {
        self.index
    }

    /// Parses `grid_text` and lazily yields the words found on it, start
    /// cell by start cell.
    ///
    /// # Errors
    /// Returns `SolveError::Grid` if the text is empty or jagged. Nothing is
    /// searched in that case.
    pub fn solve(&self, grid_text: &str) -> Result<Words<'i>, SolveError> {
        let grid = GridGraph::parse(grid_text)?;
        Ok(self.solve_grid(grid))
    }

    /// Lazily yields the words found on an already built grid.
    pub fn solve_grid(&self, grid: GridGraph) -> Words<'i> {
        Words(Hits {
            grid,
            index: self.index,
            enumerator: PathEnumerator::new(),
            next_start: 0,
            active: false,
        })
    }

    /// Searches every start cell on the rayon pool and returns all words,
    /// concatenated in start-cell order.
    pub fn solve_parallel(&self, grid: &GridGraph) -> Vec<String> {
        self.solve_parallel_hits(grid)
            .into_iter()
            .map(|hit| hit.word)
            .collect()
    }

    /// Like [`solve_parallel`](Self::solve_parallel), keeping the path of
    /// every hit.
    pub fn solve_parallel_hits(&self, grid: &GridGraph) -> Vec<Hit> {
        let per_start: Vec<Vec<Hit>> = (0..grid.graph().node_count())
            .into_par_iter()
            .map_init(PathEnumerator::new, |enumerator, start| {
                hits_from(enumerator, grid, self.index, start)
            })
            .collect();
        per_start.into_iter().flatten().collect()
    }

    /// Returns the first path, in search order, that spells `word` on `grid`.
    ///
    /// Needs no dictionary: the word itself drives the pruning.
    pub fn find_word(grid: &GridGraph, word: &str) -> Option<Vec<NodeId>> {
        (0..grid.graph().node_count()).find_map(|start| {
            let viable = |path: &[NodeId]| word.starts_with(&grid.letters_of(path));
            let accept = |path: &[NodeId]| grid.letters_of(path) == word;
            PathEnumerator::enumerate(grid, start, viable, accept)
                .ok()?
                .into_routes()
                .next()
        })
    }
}

/// Collects every hit reachable from one start cell.
///
/// `start` must be a cell of `grid`.
fn hits_from(
    enumerator: &mut PathEnumerator,
    grid: &GridGraph,
    index: &PrefixIndex,
    start: NodeId,
) -> Vec<Hit> {
    enumerator.restart(grid.graph(), start);
    let mut viable = FeasiblePrefix::new(index, grid);
    let mut accept = ExactWord::new(index, grid);
    let mut found = Vec::new();
    while let Some(result) = enumerator.next_path(grid.graph(), &mut viable, &mut accept) {
        match result {
            Ok(path) => found.push(Hit {
                word: grid.letters_of(&path),
                path,
            }),
            Err(never) => match never {},
        }
    }
    found
}

/// Lazy sequence of words returned by [`WordSearchSolver::solve`].
///
/// Start cells are visited in node order; within one start cell words come
/// out in depth-first order, neighbors tried up, down, left, right.
pub struct Words<'i>(Hits<'i>);

impl<'i> Words<'i> {
    /// The board being searched.
    pub fn grid(&self) -> &GridGraph {
        &self.0.grid
    }

    /// Yields each word together with the path that spelled it.
    pub fn hits(self) -> Hits<'i> {
        self.0
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|hit| hit.word)
    }
}

impl FusedIterator for Words<'_> {}

/// Lazy sequence of [`Hit`]s, obtained from [`Words::hits`].
pub struct Hits<'i> {
    grid: GridGraph,
    index: &'i PrefixIndex,
    enumerator: PathEnumerator,
    next_start: NodeId,
    active: bool,
}

impl Iterator for Hits<'_> {
    type Item = Hit;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.active {
                let mut viable = FeasiblePrefix::new(self.index, &self.grid);
                let mut accept = ExactWord::new(self.index, &self.grid);
                match self
                    .enumerator
                    .next_path(self.grid.graph(), &mut viable, &mut accept)
                {
                    Some(Ok(path)) => {
                        return Some(Hit {
                            word: self.grid.letters_of(&path),
                            path,
                        })
                    }
                    Some(Err(never)) => match never {},
                    None => self.active = false,
                }
            }

            if self.next_start >= self.grid.graph().node_count() {
                return None;
            }
            self.enumerator.restart(self.grid.graph(), self.next_start);
            self.next_start += 1;
            self.active = true;
        }
    }
}

impl FusedIterator for Hits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;

    const BOARD: &str = "CATER\nXLUAW\nBDFGH\nIJKMN\nOPQST";

    fn index() -> PrefixIndex {
        PrefixIndex::build(["cat", "cater", "ate", "tea", "eta"])
    }

    #[test]
    fn yields_in_search_order() {
        let index = index();
        let solver = WordSearchSolver::new(&index);
        let words: Vec<_> = solver.solve(BOARD).unwrap().collect();
        assert_eq!(words, vec!["cat", "cater", "ate", "tea", "eta"]);
    }

    #[test]
    fn no_deduplication() {
        // "aba" can be walked from either corner of the row.
        let index = PrefixIndex::build(["aba"]);
        let solver = WordSearchSolver::new(&index);
        let words: Vec<_> = solver.solve("aba\nxyz").unwrap().collect();
        assert_eq!(words, vec!["aba", "aba"]);
    }

    #[test]
    fn qu_tile_spells_two_letters() {
        let index = PrefixIndex::build(["quit", "qit"]);
        let solver = WordSearchSolver::new(&index);
        let words: Vec<_> = solver.solve("qi\nzt").unwrap().collect();
        assert_eq!(words, vec!["quit"]);
    }

    #[test]
    fn jagged_grid_is_rejected_before_search() {
        let index = index();
        let solver = WordSearchSolver::new(&index);
        assert!(matches!(
            solver.solve("abc\nab"),
            Err(SolveError::Grid(GraphError::JaggedGrid { .. }))
        ));
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let index = PrefixIndex::default();
        let solver = WordSearchSolver::new(&index);
        assert_eq!(solver.solve(BOARD).unwrap().count(), 0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let index = index();
        let solver = WordSearchSolver::new(&index);
        let grid = GridGraph::parse(BOARD).unwrap();
        let sequential: Vec<_> = solver.solve_grid(grid.clone()).collect();
        assert_eq!(solver.solve_parallel(&grid), sequential);
    }

    #[test]
    fn hits_carry_their_own_paths() {
        let index = PrefixIndex::build(["aba"]);
        let solver = WordSearchSolver::new(&index);
        let hits: Vec<_> = solver.solve("aba\nxyz").unwrap().hits().collect();
        let paths: Vec<_> = hits.iter().map(|hit| hit.path.clone()).collect();
        assert_eq!(paths, vec![vec![0, 1, 2], vec![2, 1, 0]]);
        assert!(hits.iter().all(|hit| hit.word == "aba"));

        let grid = GridGraph::parse("aba\nxyz").unwrap();
        assert_eq!(solver.solve_parallel_hits(&grid), hits);
    }

    #[test]
    fn finds_word_path() {
        let grid = GridGraph::parse(BOARD).unwrap();
        assert_eq!(
            WordSearchSolver::find_word(&grid, "cater"),
            Some(vec![0, 1, 2, 3, 4])
        );
        assert_eq!(WordSearchSolver::find_word(&grid, "tea"), Some(vec![2, 3, 8]));
        assert_eq!(WordSearchSolver::find_word(&grid, "cab"), None);
    }
}
