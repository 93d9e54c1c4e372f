//! Injected randomness for the search strategies.
//!
//! - [`RandomSource`] — The two draws a strategy needs
//! - [`create_rng`] — Seeded generator for reproducible runs

mod source;

#[cfg(test)]
pub(crate) mod scripted;

pub use source::{create_rng, RandomSource};
