//! Scripted random source for pinning search branches in tests.

use std::collections::VecDeque;

use super::RandomSource;

/// Replays fixed draws; falls back to `0` / `0.0` once exhausted.
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    pub(crate) fn new(units: &[f64], indices: &[usize]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(len - 1)
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}
