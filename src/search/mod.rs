//! Randomized search strategies for long simple paths.
//!
//! - [`GreedyDescent`] — Grow at random until no expansion exists
//! - [`Metropolis`] — Expand/shrink with Metropolis acceptance at fixed `T`
//! - [`MetropolisAnnealing`] — Same moves under the `Tmax / k` schedule
//! - [`StrategyKind`] — Serializable strategy selection

mod acceptance;
mod annealing;
mod config;
mod greedy;
mod metropolis;
mod strategy;

pub use annealing::MetropolisAnnealing;
pub use config::{AnnealingConfig, MetropolisConfig};
pub use greedy::GreedyDescent;
pub use metropolis::Metropolis;
pub use strategy::{SearchRun, SearchStrategy, StrategyKind};
