//! Handles the core steps of a run: loading the dictionary, building the
//! board, searching it and formatting the results.

use std::collections::HashSet;
use std::path::Path;

use super::error::AppError;
use super::verbose_println;
use rusty_wordsearch::dictionary::{self, PrefixIndex, WordFilter};
use rusty_wordsearch::graph::GridGraph;
use rusty_wordsearch::solver::{Hit, WordSearchSolver};

/// Loads and filters the word list, then builds the prefix index.
///
/// # Arguments
/// * `words_path` - Path to the plain-text word list.
/// * `min_length` - Shortest word kept.
/// * `quiet_mode` - Suppresses verbose logging if true.
pub fn load_dictionary(
    words_path: &Path,
    min_length: usize,
    quiet_mode: bool,
) -> Result<PrefixIndex, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading word list...");
    let filter = WordFilter::new(min_length)?;
    let words = dictionary::load_word_list(words_path, &filter)?;
    let index = PrefixIndex::build(words);
    verbose_println!(
        quiet_mode,
        "   => Kept {} word(s) of at least {} letters.",
        index.len(),
        filter.min_len()
    );
    Ok(index)
}

/// Parses the grid text into a board.
pub fn build_board(grid_text: &str, quiet_mode: bool) -> Result<GridGraph, AppError> {
    verbose_println!(quiet_mode, "[STEP 2] Building board...");
    let grid = GridGraph::parse(grid_text).map_err(rusty_wordsearch::solver::SolveError::from)?;
    verbose_println!(
        quiet_mode,
        "   => {} x {} board, {} cells.",
        grid.rows(),
        grid.cols(),
        grid.graph().node_count()
    );
    Ok(grid)
}

/// Searches the board, sequentially or on the rayon pool, keeping the path
/// of every hit.
pub fn search_board(
    solver: &WordSearchSolver<'_>,
    grid: GridGraph,
    parallel: bool,
    quiet_mode: bool,
) -> Vec<Hit> {
    verbose_println!(
        quiet_mode,
        "[STEP 3] Searching board ({})...",
        if parallel { "parallel" } else { "sequential" }
    );
    let hits: Vec<Hit> = if parallel {
        solver.solve_parallel_hits(&grid)
    } else {
        solver.solve_grid(grid).hits().collect()
    };
    verbose_println!(quiet_mode, "   => Found {} word path(s).", hits.len());
    hits
}

/// Keeps the first hit of each word.
pub fn dedup_preserving_order(hits: Vec<Hit>) -> Vec<Hit> {
    let mut seen = HashSet::with_capacity(hits.len());
    hits.into_iter()
        .filter(|hit| seen.insert(hit.word.clone()))
        .collect()
}

/// Renders one word per line. With `cols` set, each word is followed by a
/// tab and the `row,col` cells of the path that produced it.
pub fn format_words(hits: &[Hit], cols: Option<usize>) -> String {
    let mut out = String::with_capacity(hits.iter().map(|hit| hit.word.len() + 1).sum());
    for hit in hits {
        out.push_str(&hit.word);
        if let Some(cols) = cols {
            let cells: Vec<String> = hit
                .path
                .iter()
                .map(|&node| format!("{},{}", node / cols, node % cols))
                .collect();
            out.push('\t');
            out.push_str(&cells.join(" "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(word: &str, path: &[usize]) -> Hit {
        Hit {
            word: word.to_string(),
            path: path.to_vec(),
        }
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let hits = vec![
            hit("tea", &[2, 3, 8]),
            hit("cat", &[0, 1, 2]),
            hit("tea", &[7, 6, 5]),
            hit("ate", &[1, 2, 3]),
        ];
        let kept = dedup_preserving_order(hits);
        let words: Vec<_> = kept.iter().map(|hit| hit.word.as_str()).collect();
        assert_eq!(words, vec!["tea", "cat", "ate"]);
        assert_eq!(kept[0].path, vec![2, 3, 8]);
    }

    #[test]
    fn formats_with_trace() {
        let hits = vec![hit("cat", &[0, 1, 3])];
        assert_eq!(format_words(&hits, None), "cat\n");
        assert_eq!(format_words(&hits, Some(2)), "cat\t0,0 0,1 1,1\n");
    }

    #[test]
    fn trace_shows_each_duplicate_its_own_path() {
        let index = PrefixIndex::build(["aba"]);
        let solver = WordSearchSolver::new(&index);
        let grid = build_board("aba\nxyz", true).unwrap();
        let cols = grid.cols();
        for parallel in [false, true] {
            let hits = search_board(&solver, grid.clone(), parallel, true);
            assert_eq!(
                format_words(&hits, Some(cols)),
                "aba\t0,0 0,1 0,2\naba\t0,2 0,1 0,0\n"
            );
        }
    }

    #[test]
    fn jagged_board_is_a_solve_error() {
        assert!(matches!(
            build_board("abc\nde", true),
            Err(AppError::Solve(_))
        ));
    }
}
