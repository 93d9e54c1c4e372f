//! Simple-path value type.

use serde::{Deserialize, Serialize};

use super::AdjacencyGraph;

/// An ordered sequence of distinct vertices, in traversal order.
///
/// Paths are values: every transformation returns a new `Path` and leaves
/// the receiver untouched. The empty path is valid and is where every
/// search starts.
///
/// # Examples
///
/// ```
/// use u_pathsearch::models::Path;
///
/// let p = Path::from(vec![2, 3]);
/// assert_eq!(p.prepended(1).vertices(), &[1, 2, 3]);
/// assert_eq!(p.appended(4).vertices(), &[2, 3, 4]);
/// assert_eq!(p.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    /// The empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// A path visiting only `v`.
    pub fn singleton(v: usize) -> Self {
        Self { vertices: vec![v] }
    }

    /// Vertices in traversal order.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Linear-scan membership test.
    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// A new path with `v` in front.
    pub fn prepended(&self, v: usize) -> Self {
        let mut vertices = Vec::with_capacity(self.len() + 1);
        vertices.push(v);
        vertices.extend_from_slice(&self.vertices);
        Self { vertices }
    }

    /// A new path with `v` at the end.
    pub fn appended(&self, v: usize) -> Self {
        let mut vertices = Vec::with_capacity(self.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(v);
        Self { vertices }
    }

    /// A new path without its first vertex (empty stays empty).
    pub fn without_first(&self) -> Self {
        Self {
            vertices: self.vertices.get(1..).unwrap_or_default().to_vec(),
        }
    }

    /// A new path without its last vertex (empty stays empty).
    pub fn without_last(&self) -> Self {
        let end = self.len().saturating_sub(1);
        Self {
            vertices: self.vertices[..end].to_vec(),
        }
    }

    /// Returns `true` if no vertex repeats.
    pub fn is_simple(&self) -> bool {
        self.vertices
            .iter()
            .enumerate()
            .all(|(i, v)| !self.vertices[i + 1..].contains(v))
    }

    /// Returns `true` if every vertex is in range and consecutive vertices
    /// are adjacent in `graph`.
    pub fn is_walk_in(&self, graph: &AdjacencyGraph) -> bool {
        self.vertices.iter().all(|&v| v < graph.vertex_count())
            && self
                .vertices
                .windows(2)
                .all(|w| graph.are_adjacent(w[0], w[1]))
    }

    /// Consumes the path, returning its vertices.
    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }
}

impl From<Vec<usize>> for Path {
    fn from(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }
}

impl AsRef<[usize]> for Path {
    fn as_ref(&self) -> &[usize] {
        &self.vertices
    }
}
