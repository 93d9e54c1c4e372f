//! Path energy.
//!
//! Lower energy means a longer path; the search strategies minimise it.

mod energy;

pub use energy::{energy, EMPTY_PATH_ENERGY};
