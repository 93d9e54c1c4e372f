//! Random graph with a planted long path.
//!
//! # Algorithm
//!
//! 1. Chain vertices `0 - 1 - ... - min_optimal`, planting a simple path of
//!    `min_optimal` edges.
//! 2. Add `edge_count - min_optimal` further edges. One endpoint is drawn
//!    from vertices that already have a neighbor (uniformly from all
//!    vertices while none do), the other uniformly from the remaining
//!    vertices, so new edges cluster around the existing structure.
//!
//! Extra edges may duplicate existing ones; parallel edges are kept.

use crate::error::GraphError;
use crate::models::AdjacencyGraph;
use crate::random::RandomSource;

/// Builds a random graph with `vertex_count` vertices and `edge_count` edges
/// that contains a simple path through vertices `0..=min_optimal`.
///
/// With fewer than two vertices no extra edge can avoid being a self-loop,
/// so only the planted chain is built.
///
/// # Examples
///
/// ```
/// use u_pathsearch::generate::random_graph;
/// use u_pathsearch::random::create_rng;
///
/// let g = random_graph(20, 60, 10, &mut create_rng(1)).expect("valid sizes");
/// assert_eq!(g.vertex_count(), 20);
/// assert_eq!(g.edge_count(), 60);
/// assert!((1..=10).all(|v| g.are_adjacent(v - 1, v)));
/// ```
pub fn random_graph<R>(
    vertex_count: usize,
    edge_count: usize,
    min_optimal: usize,
    rng: &mut R,
) -> Result<AdjacencyGraph, GraphError>
where
    R: RandomSource + ?Sized,
{
    if min_optimal > 0 && min_optimal >= vertex_count {
        return Err(GraphError::ChainTooLong {
            min_optimal,
            vertex_count,
        });
    }
    if edge_count < min_optimal {
        return Err(GraphError::TooFewEdges {
            edge_count,
            min_optimal,
        });
    }

    let mut graph = AdjacencyGraph::empty(vertex_count);
    let mut touched: Vec<usize> = Vec::new();
    for v in 1..=min_optimal {
        graph.add_edge(v - 1, v)?;
    }
    if min_optimal > 0 {
        touched.extend(0..=min_optimal);
    }

    if vertex_count < 2 {
        return Ok(graph);
    }

    for _ in min_optimal..edge_count {
        let u = if touched.is_empty() {
            rng.index(vertex_count)
        } else {
            touched[rng.index(touched.len())]
        };
        // uniform over every vertex except u
        let mut v = rng.index(vertex_count - 1);
        if v >= u {
            v += 1;
        }
        for w in [u, v] {
            if graph.degree(w) == 0 {
                touched.push(w);
            }
        }
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}
