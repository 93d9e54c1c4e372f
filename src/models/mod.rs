//! Domain model types for path search.
//!
//! Provides the undirected adjacency-list graph that every strategy reads,
//! and the simple-path value type that strategies evolve.

mod graph;
mod path;

pub use graph::AdjacencyGraph;
pub use path::Path;
