//! Enumerates simple paths through a graph under caller-supplied viability
//! and acceptance predicates, and uses that engine to find every dictionary
//! word traceable on a letter grid.
//!
//! ```
//! use rusty_wordsearch::dictionary::PrefixIndex;
//! use rusty_wordsearch::solver::WordSearchSolver;
//!
//! let index = PrefixIndex::build(["cat", "cater", "tea"]);
//! let solver = WordSearchSolver::new(&index);
//! let words: Vec<String> = solver.solve("CATER\nXLUAW").unwrap().collect();
//! assert_eq!(words, ["cat", "cater", "tea"]);
//! ```

pub mod dictionary;
pub mod graph;
pub mod path;
pub mod solver;
