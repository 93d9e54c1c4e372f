//! Adjacency-list graph.

use serde::Serialize;

use crate::error::GraphError;

/// An undirected graph stored as one neighbor list per vertex.
///
/// Every edge `(u, v)` is recorded in both `u`'s and `v`'s lists. Parallel
/// edges and self-loops are kept as given, so a vertex may appear several
/// times in a neighbor list. The graph is read-only once built and is lent
/// by reference to the search strategies.
///
/// # Examples
///
/// ```
/// use u_pathsearch::models::AdjacencyGraph;
///
/// let g = AdjacencyGraph::from_edges(3, &[(0, 1), (1, 2)]).expect("valid edges");
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.neighbors_of(1), &[0, 2]);
/// assert!(g.are_adjacent(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from 0-based undirected edges.
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if an endpoint is not in
    /// `[0, vertex_count)`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self::empty(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Inserts `(u, v)` into both endpoints' neighbor lists.
    ///
    /// Only reachable while a graph is being assembled inside this crate.
    pub(crate) fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
        self.edge_count += 1;
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of edges inserted, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of `v` in insertion order, duplicates included.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    pub fn neighbors_of(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    /// Length of `v`'s neighbor list.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    /// Returns `true` if at least one edge joins `u` and `v`.
    pub fn are_adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors[u].contains(&v)
    }
}
