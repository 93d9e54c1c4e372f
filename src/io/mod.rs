//! Text input and output boundaries.
//!
//! - [`parse_graph`] — `V E` followed by `E` pairs of 1-based vertex indices
//! - [`render_path`] — Path length, then 1-based vertices joined by `" - "`

mod text;

pub use text::{parse_graph, render_path};
