//! # u-pathsearch
//!
//! Randomized local search for long simple paths in undirected graphs.
//! Paths grow or shrink one endpoint at a time; strategies differ in how
//! they pick and accept those moves.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (AdjacencyGraph, Path)
//! - [`neighborhood`] — Expansion and shrink neighbor sets
//! - [`evaluation`] — Path energy (lower is longer)
//! - [`random`] — Injected random source and seeded generator
//! - [`search`] — Greedy, Metropolis, and annealing strategies
//! - [`generate`] — Random graphs with a planted long path
//! - [`io`] — Graph text input and path text output
//! - [`bench`] — Strategy comparison over random graphs
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_pathsearch::io::parse_graph;
//! use u_pathsearch::random::create_rng;
//! use u_pathsearch::search::{MetropolisAnnealing, AnnealingConfig, SearchStrategy};
//!
//! let graph = parse_graph("5 4  1 2  2 3  3 4  4 5").expect("well-formed input");
//! let search = MetropolisAnnealing::new(&graph, AnnealingConfig::default().with_t_max(100.0))
//!     .expect("valid config");
//! let path = search.solve(&mut create_rng(42));
//! assert!(path.is_simple() && path.is_walk_in(&graph));
//! ```

pub mod bench;
pub mod error;
pub mod evaluation;
pub mod generate;
pub mod io;
pub mod models;
pub mod neighborhood;
pub mod random;
pub mod search;
