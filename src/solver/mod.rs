// error module
mod error;
// predicates over grid letters
mod predicate;
// solver and lazy word sequence
mod word_search;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::SolveError;
pub use predicate::{ExactWord, FeasiblePrefix};
pub use word_search::{Hit, Hits, WordSearchSolver, Words};
