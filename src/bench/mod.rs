//! Strategy comparison on random graphs.
//!
//! - [`BenchmarkConfig`] — Fixture sizes, repeat count, seed, strategies
//! - [`run_benchmark`] — Runs every strategy on the same fixtures
//! - [`BenchmarkReport`] — Per-strategy summary

mod runner;

pub use runner::{run_benchmark, BenchmarkConfig, BenchmarkReport, StrategySummary};
