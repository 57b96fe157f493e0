// error module
mod error;
// explorer module
mod explorer;

// predicate module
pub mod predicate;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the explorer module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use explorer::{PathEnumerator, Paths, Routes};
pub use predicate::{Always, AvoidsBefore, EndsAt, Fallible, PathPredicate};
