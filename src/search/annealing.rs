//! Metropolis search with a cooling schedule.
//!
//! # Algorithm
//!
//! Iteration `k = 1, 2, ...` runs at temperature `T_k = Tmax / k` and uses
//! the same proposal and acceptance rule as fixed-temperature Metropolis.
//! The search stops as soon as `T_k <= Tmin`, so it performs exactly
//! `|{k >= 1 : Tmax / k > Tmin}|` iterations regardless of the graph. A run
//! on a graph without vertices stops immediately, having nothing to propose.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D., Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

use log::{debug, trace};

use crate::error::ConfigError;
use crate::models::{AdjacencyGraph, Path};
use crate::neighborhood::{expand, shrink};
use crate::random::RandomSource;

use super::acceptance::{accepts, propose};
use super::{AnnealingConfig, SearchRun, SearchStrategy};

/// Metropolis acceptance under the `Tmax / k` cooling schedule.
///
/// # Examples
///
/// ```
/// use u_pathsearch::models::AdjacencyGraph;
/// use u_pathsearch::random::create_rng;
/// use u_pathsearch::search::{AnnealingConfig, MetropolisAnnealing, SearchStrategy};
///
/// let g = AdjacencyGraph::from_edges(3, &[(0, 1), (1, 2)]).expect("valid");
/// let config = AnnealingConfig::default().with_t_max(50.0).with_t_min(1.0);
/// let run = MetropolisAnnealing::new(&g, config)
///     .expect("valid config")
///     .run(&mut create_rng(42));
/// assert_eq!(run.iterations, 49);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetropolisAnnealing<'g> {
    graph: &'g AdjacencyGraph,
    config: AnnealingConfig,
}

impl<'g> MetropolisAnnealing<'g> {
    /// Report label.
    pub const NAME: &'static str = "annealing";

    /// Creates the strategy, rejecting non-positive temperatures and `pi`
    /// outside `[0, 1]`.
    pub fn new(graph: &'g AdjacencyGraph, config: AnnealingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }
}

impl SearchStrategy for MetropolisAnnealing<'_> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SearchRun {
        let mut current = Path::new();
        let mut iterations = 0;
        let mut accepted = 0;
        let mut k: u64 = 1;
        let mut temperature = self.config.temperature_at(k);

        while temperature > self.config.t_min {
            let expansions = expand(&current, self.graph);
            let shrinks = shrink(&current);
            let Some(candidate) = propose(&expansions, &shrinks, self.config.expand_bias, rng)
            else {
                break;
            };
            iterations += 1;

            if accepts(&current, candidate, temperature, rng) {
                trace!(
                    "annealing: T = {:.4} moved {} -> {}",
                    temperature,
                    current.len(),
                    candidate.len()
                );
                current = candidate.clone();
                accepted += 1;
            }

            k += 1;
            temperature = self.config.temperature_at(k);
        }

        debug!(
            "annealing: stopped at T = {:.4} after {} iterations ({} accepted) with path length {}",
            temperature,
            iterations,
            accepted,
            current.len()
        );
        SearchRun::new(current, iterations, accepted)
    }
}
