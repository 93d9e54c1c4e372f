//! Strategy configuration.
//!
//! Defaults reproduce the parameters of the reference benchmark driver.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters for fixed-temperature [`Metropolis`](super::Metropolis).
///
/// # Examples
///
/// ```
/// use u_pathsearch::search::MetropolisConfig;
///
/// let config = MetropolisConfig::default()
///     .with_temperature(2.0)
///     .with_expand_bias(0.9)
///     .with_max_iterations(10_000);
/// assert!(config.validate().is_ok());
/// assert!(MetropolisConfig::default().with_temperature(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetropolisConfig {
    /// Temperature `T > 0`.
    pub temperature: f64,
    /// Probability `pi` of proposing an expansion rather than a shrink.
    pub expand_bias: f64,
    /// Optional hard cap on iterations. `None` runs until no expansion exists.
    pub max_iterations: Option<usize>,
}

impl Default for MetropolisConfig {
    fn default() -> Self {
        Self {
            temperature: 15_000.0,
            expand_bias: 0.75,
            max_iterations: None,
        }
    }
}

impl MetropolisConfig {
    /// Sets the temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the expand bias `pi`.
    pub fn with_expand_bias(mut self, expand_bias: f64) -> Self {
        self.expand_bias = expand_bias;
        self
    }

    /// Caps the number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Checks that the parameters define a valid acceptance rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_temperature(self.temperature)?;
        check_expand_bias(self.expand_bias)?;
        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterationCap);
        }
        Ok(())
    }
}

/// Parameters for [`MetropolisAnnealing`](super::MetropolisAnnealing).
///
/// Iteration `k` (from 1) runs at `t_max / k`; the search stops once that
/// temperature is at or below `t_min`.
///
/// # Examples
///
/// ```
/// use u_pathsearch::search::AnnealingConfig;
///
/// let config = AnnealingConfig::default().with_t_max(100.0).with_t_min(0.5);
/// assert_eq!(config.schedule_length(), 199);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub t_max: f64,
    /// Stopping temperature, strictly positive.
    pub t_min: f64,
    /// Probability `pi` of proposing an expansion rather than a shrink.
    pub expand_bias: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            t_max: 15_000.0,
            t_min: 1.0,
            expand_bias: 0.75,
        }
    }
}

impl AnnealingConfig {
    /// Sets the starting temperature.
    pub fn with_t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    /// Sets the stopping temperature.
    pub fn with_t_min(mut self, t_min: f64) -> Self {
        self.t_min = t_min;
        self
    }

    /// Sets the expand bias `pi`.
    pub fn with_expand_bias(mut self, expand_bias: f64) -> Self {
        self.expand_bias = expand_bias;
        self
    }

    /// Temperature at iteration `k` (1-based).
    pub fn temperature_at(&self, k: u64) -> f64 {
        self.t_max / k as f64
    }

    /// Number of iterations the schedule allows: the count of `k >= 1`
    /// with `t_max / k > t_min`.
    pub fn schedule_length(&self) -> u64 {
        let mut k = 1;
        while self.temperature_at(k) > self.t_min {
            k += 1;
        }
        k - 1
    }

    /// Checks that the schedule is well defined and terminates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |t: f64| t.is_finite() && t > 0.0;
        if !positive(self.t_max) || !positive(self.t_min) {
            return Err(ConfigError::InvalidCoolingRange {
                t_max: self.t_max,
                t_min: self.t_min,
            });
        }
        check_expand_bias(self.expand_bias)
    }
}

fn check_temperature(temperature: f64) -> Result<(), ConfigError> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTemperature(temperature))
    }
}

fn check_expand_bias(expand_bias: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&expand_bias) {
        Ok(())
    } else {
        Err(ConfigError::InvalidExpandBias(expand_bias))
    }
}
