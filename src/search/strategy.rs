//! Common strategy interface and run record.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::evaluation::energy;
use crate::models::{AdjacencyGraph, Path};
use crate::random::RandomSource;

use super::{AnnealingConfig, GreedyDescent, Metropolis, MetropolisAnnealing, MetropolisConfig};

/// What a single search run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRun {
    /// The final path.
    pub path: Path,
    /// Loop iterations performed.
    pub iterations: usize,
    /// Iterations whose candidate became the current path.
    pub accepted: usize,
    /// Energy of `path`.
    pub energy: f64,
}

impl SearchRun {
    /// Records a finished run, computing the final energy.
    pub fn new(path: Path, iterations: usize, accepted: usize) -> Self {
        let energy = energy(&path);
        Self {
            path,
            iterations,
            accepted,
            energy,
        }
    }
}

/// A randomized search for a long simple path.
///
/// Every strategy starts from the empty path, borrows its graph read-only,
/// and draws all randomness from the injected source.
pub trait SearchStrategy {
    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;

    /// Runs the search to termination.
    fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SearchRun;

    /// Runs the search and returns only the final path.
    fn solve<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Path {
        self.run(rng).path
    }
}

/// Strategy selection as data, for drivers that load their setup from a file.
///
/// # Examples
///
/// ```
/// use u_pathsearch::search::{StrategyKind, MetropolisConfig};
///
/// let kind: StrategyKind = serde_json::from_str(
///     r#"{"strategy": "metropolis", "temperature": 3.0}"#,
/// ).expect("valid json");
/// assert_eq!(kind, StrategyKind::Metropolis(MetropolisConfig::default().with_temperature(3.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyKind {
    /// [`GreedyDescent`].
    Greedy,
    /// [`Metropolis`] with the given configuration.
    Metropolis(MetropolisConfig),
    /// [`MetropolisAnnealing`] with the given configuration.
    Annealing(AnnealingConfig),
}

impl StrategyKind {
    /// Short label used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => GreedyDescent::NAME,
            Self::Metropolis(_) => Metropolis::NAME,
            Self::Annealing(_) => MetropolisAnnealing::NAME,
        }
    }

    /// Builds the strategy over `graph` and runs it once.
    pub fn run<R>(&self, graph: &AdjacencyGraph, rng: &mut R) -> Result<SearchRun, ConfigError>
    where
        R: RandomSource + ?Sized,
    {
        let run = match *self {
            Self::Greedy => GreedyDescent::new(graph).run(rng),
            Self::Metropolis(config) => Metropolis::new(graph, config)?.run(rng),
            Self::Annealing(config) => MetropolisAnnealing::new(graph, config)?.run(rng),
        };
        Ok(run)
    }
}
