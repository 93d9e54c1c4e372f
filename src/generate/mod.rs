//! Synthetic graph fixtures for benchmarking.

mod random_graph;

pub use random_graph::random_graph;
