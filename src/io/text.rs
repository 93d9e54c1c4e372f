//! Whitespace-separated graph reader and path writer.

use std::str::SplitWhitespace;

use crate::error::ParseError;
use crate::models::{AdjacencyGraph, Path};

/// Parses a graph description.
///
/// The input holds the vertex count `V`, the edge count `E`, then `E` pairs
/// of 1-based vertex indices, all separated by arbitrary whitespace. Tokens
/// after the last edge are ignored.
///
/// # Examples
///
/// ```
/// use u_pathsearch::io::parse_graph;
///
/// let g = parse_graph("3 2\n1 2\n2 3\n").expect("well-formed input");
/// assert_eq!(g.neighbors_of(1), &[0, 2]);
/// ```
pub fn parse_graph(input: &str) -> Result<AdjacencyGraph, ParseError> {
    let mut tokens = input.split_whitespace();
    let vertex_count = next_number(&mut tokens, "vertex count")?;
    let edge_count = next_number(&mut tokens, "edge count")?;

    let mut edges = Vec::new();
    for edge in 0..edge_count {
        let u = next_number(&mut tokens, "edge endpoint")?;
        let v = next_number(&mut tokens, "edge endpoint")?;
        if u == 0 || v == 0 {
            return Err(ParseError::VertexIndexZero { edge });
        }
        edges.push((u - 1, v - 1));
    }
    Ok(AdjacencyGraph::from_edges(vertex_count, &edges)?)
}

fn next_number(tokens: &mut SplitWhitespace<'_>, expected: &'static str) -> Result<usize, ParseError> {
    let token = tokens.next().ok_or(ParseError::MissingToken { expected })?;
    token.parse().map_err(|_| ParseError::InvalidInteger {
        token: token.to_string(),
    })
}

/// Renders a path as its length on one line and its 1-based vertices,
/// joined by `" - "`, on the next.
///
/// # Examples
///
/// ```
/// use u_pathsearch::io::render_path;
/// use u_pathsearch::models::Path;
///
/// assert_eq!(render_path(&Path::from(vec![0, 4, 2])), "3\n1 - 5 - 3\n");
/// assert_eq!(render_path(&Path::new()), "0\n\n");
/// ```
pub fn render_path(path: &Path) -> String {
    let joined = path
        .vertices()
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" - ");
    format!("{}\n{}\n", path.len(), joined)
}
