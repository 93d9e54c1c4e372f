//! Fixed-temperature Metropolis search.
//!
//! # Algorithm
//!
//! Start from the empty path. Each iteration:
//!
//! 1. Compute the expansion and shrink sets of the current path `p`.
//! 2. Draw `u ~ U[0, 1)`. Propose a uniform expansion if
//!    `(u <= pi && expansions non-empty) || shrinks empty`, otherwise a
//!    uniform shrink.
//! 3. Move to the proposal `q` if `E(q) < E(p)`, else with probability
//!    `exp(-(E(q) - E(p)) / T)`.
//!
//! The loop ends when the current path has no expansion. Shrinks are still
//! proposed on every iteration, including the last. An optional iteration
//! cap bounds runs that keep oscillating between growing and shrinking.
//!
//! # Reference
//!
//! Metropolis, N. et al. (1953). "Equation of State Calculations by Fast
//! Computing Machines", *J. Chem. Phys.* 21(6), 1087-1092.

use log::{debug, trace, warn};

use crate::error::ConfigError;
use crate::models::{AdjacencyGraph, Path};
use crate::neighborhood::{expand, shrink};
use crate::random::RandomSource;

use super::acceptance::{accepts, propose};
use super::{MetropolisConfig, SearchRun, SearchStrategy};

/// Metropolis acceptance at a constant temperature.
///
/// # Examples
///
/// ```
/// use u_pathsearch::models::AdjacencyGraph;
/// use u_pathsearch::random::create_rng;
/// use u_pathsearch::search::{Metropolis, MetropolisConfig, SearchStrategy};
///
/// let g = AdjacencyGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).expect("valid");
/// let search = Metropolis::new(&g, MetropolisConfig::default()).expect("valid config");
/// let path = search.solve(&mut create_rng(42));
/// assert!(path.is_walk_in(&g));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Metropolis<'g> {
    graph: &'g AdjacencyGraph,
    config: MetropolisConfig,
}

impl<'g> Metropolis<'g> {
    /// Report label.
    pub const NAME: &'static str = "metropolis";

    /// Creates the strategy, rejecting configurations with `T <= 0` or
    /// `pi` outside `[0, 1]`.
    pub fn new(graph: &'g AdjacencyGraph, config: MetropolisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &MetropolisConfig {
        &self.config
    }
}

impl SearchStrategy for Metropolis<'_> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SearchRun {
        let MetropolisConfig {
            temperature,
            expand_bias,
            max_iterations,
        } = self.config;

        let mut current = Path::new();
        let mut expansions = expand(&current, self.graph);
        let mut shrinks = shrink(&current);
        let mut iterations = 0;
        let mut accepted = 0;

        while !expansions.is_empty() {
            if max_iterations.is_some_and(|cap| iterations >= cap) {
                warn!(
                    "metropolis: iteration cap {} reached with path length {}",
                    iterations,
                    current.len()
                );
                break;
            }
            iterations += 1;

            let Some(candidate) = propose(&expansions, &shrinks, expand_bias, rng) else {
                break;
            };
            if accepts(&current, candidate, temperature, rng) {
                trace!(
                    "metropolis: iteration {} moved {} -> {}",
                    iterations,
                    current.len(),
                    candidate.len()
                );
                current = candidate.clone();
                accepted += 1;
            }

            expansions = expand(&current, self.graph);
            shrinks = shrink(&current);
        }

        debug!(
            "metropolis: stopped after {} iterations ({} accepted) with path length {}",
            iterations,
            accepted,
            current.len()
        );
        SearchRun::new(current, iterations, accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::random::scripted::ScriptedSource;

    fn chain(n: usize) -> AdjacencyGraph {
        let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
        AdjacencyGraph::from_edges(n, &edges).expect("valid")
    }

    #[test]
    fn test_rejects_non_positive_temperature() {
        let g = chain(3);
        let err = Metropolis::new(&g, MetropolisConfig::default().with_temperature(0.0))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidTemperature(0.0));
    }

    #[test]
    fn test_zero_vertices_returns_empty() {
        let g = AdjacencyGraph::empty(0);
        let run = Metropolis::new(&g, MetropolisConfig::default())
            .expect("valid")
            .run(&mut create_rng(3));
        assert!(run.path.is_empty());
        assert_eq!(run.iterations, 0);
    }

    #[test]
    fn test_edgeless_graph_ends_on_singleton() {
        // From the empty path only singletons exist, and a singleton in an
        // edgeless graph cannot grow, so the first accepted move ends the run.
        let g = AdjacencyGraph::empty(3);
        for seed in 0..10 {
            let path = Metropolis::new(&g, MetropolisConfig::default())
                .expect("valid")
                .solve(&mut create_rng(seed));
            assert_eq!(path.len(), 1);
        }
    }

    #[test]
    fn test_pure_expansion_walks_whole_chain() {
        // pi = 1 never proposes a shrink while growth is possible, and every
        // expansion is a strict improvement.
        let g = chain(6);
        let config = MetropolisConfig::default().with_expand_bias(1.0);
        for seed in 0..20 {
            let run = Metropolis::new(&g, config)
                .expect("valid")
                .run(&mut create_rng(seed));
            assert_eq!(run.path.len(), 6);
            assert_eq!(run.iterations, 6);
            assert_eq!(run.accepted, 6);
        }
    }

    #[test]
    fn test_scripted_shrink_then_regrow() {
        // chain 0-1-2, T tiny so worse moves are rejected unless the draw is 0
        let g = chain(3);
        let config = MetropolisConfig::default()
            .with_temperature(1e-9)
            .with_expand_bias(0.5);
        // iter 1: u=0.1 expand, pick vertex 1 -> [1]
        // iter 2: u=0.9 shrink, pick 0 -> [] (worse), accept draw 0.5 -> rejected
        // iter 3: u=0.1 expand, pick index 3 -> [1, 2]
        // iter 4: u=0.1 expand, pick 0 -> [0, 1, 2]; no expansion left
        let mut rng = ScriptedSource::new(&[0.1, 0.9, 0.5, 0.1, 0.1], &[1, 0, 3, 0]);
        let run = Metropolis::new(&g, config).expect("valid").run(&mut rng);
        assert_eq!(run.path.vertices(), &[0, 1, 2]);
        assert_eq!(run.iterations, 4);
        assert_eq!(run.accepted, 3);
    }

    #[test]
    fn test_iteration_cap_stops_run() {
        let g = chain(10);
        let config = MetropolisConfig::default().with_max_iterations(3);
        let run = Metropolis::new(&g, config)
            .expect("valid")
            .run(&mut create_rng(11));
        assert_eq!(run.iterations, 3);
        assert!(run.path.len() <= 3);
    }

    #[test]
    fn test_result_is_simple_walk() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (3, 4), (4, 5), (5, 1)];
        let g = AdjacencyGraph::from_edges(6, &edges).expect("valid");
        for seed in 0..20 {
            let path = Metropolis::new(&g, MetropolisConfig::default())
                .expect("valid")
                .solve(&mut create_rng(seed));
            assert!(path.is_simple());
            assert!(path.is_walk_in(&g));
            assert!(expand(&path, &g).is_empty());
        }
    }
}
