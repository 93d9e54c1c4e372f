//! Greedy random expansion.
//!
//! # Algorithm
//!
//! Start from the empty path. While the expansion set is non-empty, move to
//! one expansion chosen uniformly at random. There is no shrink step and no
//! energy test: the path grows by one vertex per iteration until neither
//! endpoint has an unused neighbor.
//!
//! # Complexity
//!
//! At most `|V|` iterations, each one expansion-set computation.

use log::debug;

use crate::models::{AdjacencyGraph, Path};
use crate::neighborhood::expand;
use crate::random::RandomSource;

use super::{SearchRun, SearchStrategy};

/// Baseline strategy: grow at random until stuck.
///
/// # Examples
///
/// ```
/// use u_pathsearch::models::AdjacencyGraph;
/// use u_pathsearch::random::create_rng;
/// use u_pathsearch::search::{GreedyDescent, SearchStrategy};
///
/// let g = AdjacencyGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).expect("valid");
/// let path = GreedyDescent::new(&g).solve(&mut create_rng(42));
/// assert_eq!(path.len(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyDescent<'g> {
    graph: &'g AdjacencyGraph,
}

impl<'g> GreedyDescent<'g> {
    /// Report label.
    pub const NAME: &'static str = "greedy";

    /// Creates the strategy over `graph`.
    pub fn new(graph: &'g AdjacencyGraph) -> Self {
        Self { graph }
    }
}

impl SearchStrategy for GreedyDescent<'_> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SearchRun {
        let mut current = Path::new();
        let mut iterations = 0;
        loop {
            let mut expansions = expand(&current, self.graph);
            if expansions.is_empty() {
                break;
            }
            let pick = rng.index(expansions.len());
            current = expansions.swap_remove(pick);
            iterations += 1;
        }
        debug!(
            "greedy: stopped after {} iterations with path length {}",
            iterations,
            current.len()
        );
        SearchRun::new(current, iterations, iterations)
    }
}
