// error module
mod error;
// adjacency-list graph
#[allow(clippy::module_inception)]
mod graph;
// letter grid adapter
mod grid;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use graph::{Graph, NodeId};
pub use grid::GridGraph;
