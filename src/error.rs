//! Error types for graph construction, configuration, and text input.

use thiserror::Error;

/// Errors raised while building an [`AdjacencyGraph`](crate::models::AdjacencyGraph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint lies outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending 0-based vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The guaranteed chain needs more vertices than the graph has.
    #[error("a chain of {min_optimal} edges needs more than {vertex_count} vertices")]
    ChainTooLong {
        /// Requested chain length in edges.
        min_optimal: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The edge budget does not cover the guaranteed chain.
    #[error("{edge_count} edges cannot contain a chain of {min_optimal} edges")]
    TooFewEdges {
        /// Total requested edges.
        edge_count: usize,
        /// Requested chain length in edges.
        min_optimal: usize,
    },
}

/// Errors raised when validating a search configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Temperature must be finite and strictly positive.
    #[error("temperature must be finite and > 0, got {0}")]
    InvalidTemperature(f64),
    /// Expand bias must lie in `[0, 1]`.
    #[error("expand bias must lie in [0, 1], got {0}")]
    InvalidExpandBias(f64),
    /// Cooling range must satisfy `t_max > 0`, `t_min > 0`, both finite.
    #[error("invalid cooling range: t_max = {t_max}, t_min = {t_min}")]
    InvalidCoolingRange {
        /// Starting temperature.
        t_max: f64,
        /// Stopping temperature.
        t_min: f64,
    },
    /// An iteration cap of zero would never look at the graph.
    #[error("iteration cap must be at least 1")]
    ZeroIterationCap,
}

/// Errors raised while reading a graph description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended before the expected token.
    #[error("unexpected end of input, expected {expected}")]
    MissingToken {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A token was not a non-negative integer.
    #[error("invalid integer token {token:?}")]
    InvalidInteger {
        /// The token as read.
        token: String,
    },
    /// Vertex indices in the input are 1-based, so 0 is never valid.
    #[error("vertex index 0 in edge {edge} (indices are 1-based)")]
    VertexIndexZero {
        /// 0-based position of the edge in the input.
        edge: usize,
    },
    /// The parsed edges do not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised while running a benchmark.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchmarkError {
    /// The graph fixture could not be generated.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// A configured strategy is invalid.
    #[error("invalid strategy configuration: {0}")]
    Config(#[from] ConfigError),
}
