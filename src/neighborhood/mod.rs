//! Neighbor generation over variable-length paths.
//!
//! - [`expand`] — Paths one vertex longer (grow either endpoint)
//! - [`shrink`] — Paths one vertex shorter (drop either endpoint)
//!
//! Both are pure: the same path and graph always yield the same candidates
//! in the same order.

mod expand;
mod shrink;

pub use expand::expand;
pub use shrink::shrink;
