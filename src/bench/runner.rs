//! Benchmark runner.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::BenchmarkError;
use crate::generate::random_graph;
use crate::random::create_rng;
use crate::search::{AnnealingConfig, MetropolisConfig, StrategyKind};

/// Benchmark setup. Defaults: ten graphs of 100 vertices and 4000 edges with
/// a planted 60-edge path, each searched by all three strategies.
///
/// # Examples
///
/// ```
/// use u_pathsearch::bench::BenchmarkConfig;
///
/// let config = BenchmarkConfig::default().with_repeats(3).with_seed(7);
/// assert_eq!(config.repeats, 3);
/// assert_eq!(config.strategies.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Number of random graphs.
    pub repeats: usize,
    /// Vertices per graph.
    pub vertex_count: usize,
    /// Edges per graph, planted chain included.
    pub edge_count: usize,
    /// Edges in the planted path.
    pub min_optimal: usize,
    /// Seed for graph generation and every search.
    pub seed: u64,
    /// Strategies to compare.
    pub strategies: Vec<StrategyKind>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repeats: 10,
            vertex_count: 100,
            edge_count: 4000,
            min_optimal: 60,
            seed: 42,
            strategies: vec![
                StrategyKind::Greedy,
                StrategyKind::Metropolis(MetropolisConfig::default()),
                StrategyKind::Annealing(AnnealingConfig::default()),
            ],
        }
    }
}

impl BenchmarkConfig {
    /// Sets the number of graphs.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Sets the fixture sizes.
    pub fn with_graph(mut self, vertex_count: usize, edge_count: usize, min_optimal: usize) -> Self {
        self.vertex_count = vertex_count;
        self.edge_count = edge_count;
        self.min_optimal = min_optimal;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the strategy list.
    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }
}

/// Aggregate results for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    /// Strategy label.
    pub name: String,
    /// Mean final path length over all repeats.
    pub mean_length: f64,
    /// Longest final path seen.
    pub best_length: usize,
    /// Mean iterations per run.
    pub mean_iterations: f64,
}

/// Benchmark outcome, one summary per configured strategy in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Number of graphs searched.
    pub repeats: usize,
    /// Per-strategy results.
    pub summaries: Vec<StrategySummary>,
}

impl BenchmarkReport {
    /// Looks up a summary by strategy label.
    pub fn summary(&self, name: &str) -> Option<&StrategySummary> {
        self.summaries.iter().find(|s| s.name == name)
    }
}

/// Runs every configured strategy once on each of `repeats` random graphs.
///
/// All strategy configurations are validated before any graph is built.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport, BenchmarkError> {
    for kind in &config.strategies {
        match kind {
            StrategyKind::Greedy => {}
            StrategyKind::Metropolis(c) => c.validate()?,
            StrategyKind::Annealing(c) => c.validate()?,
        }
    }

    let mut rng = create_rng(config.seed);
    let n = config.strategies.len();
    let mut total_length = vec![0usize; n];
    let mut best_length = vec![0usize; n];
    let mut total_iterations = vec![0usize; n];

    for _ in 0..config.repeats {
        let graph = random_graph(
            config.vertex_count,
            config.edge_count,
            config.min_optimal,
            &mut rng,
        )?;
        for (i, kind) in config.strategies.iter().enumerate() {
            let run = kind.run(&graph, &mut rng)?;
            total_length[i] += run.path.len();
            best_length[i] = best_length[i].max(run.path.len());
            total_iterations[i] += run.iterations;
        }
    }

    let denom = config.repeats.max(1) as f64;
    let summaries: Vec<StrategySummary> = config
        .strategies
        .iter()
        .enumerate()
        .map(|(i, kind)| StrategySummary {
            name: kind.name().to_string(),
            mean_length: total_length[i] as f64 / denom,
            best_length: best_length[i],
            mean_iterations: total_iterations[i] as f64 / denom,
        })
        .collect();

    for s in &summaries {
        info!(
            "bench: {} mean length {:.1} (best {}) over {} graphs",
            s.name, s.mean_length, s.best_length, config.repeats
        );
    }

    Ok(BenchmarkReport {
        repeats: config.repeats,
        summaries,
    })
}
