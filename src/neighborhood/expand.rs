//! One-vertex path expansion.
//!
//! # Algorithm
//!
//! From the empty path every vertex is a candidate start. Otherwise, with
//! `s` the first vertex and `f` the last:
//!
//! ```text
//! prepend: [i] ++ p   for i in neighbors(s), i not in p
//! append:  p ++ [i]   for i in neighbors(f), i not in p
//! ```
//!
//! All prepend candidates come first, then all append candidates, each in
//! neighbor-list order. Parallel edges yield repeated candidates.
//!
//! # Complexity
//!
//! O((deg(s) + deg(f)) · |p|) for the membership scans plus copying.

use crate::models::{AdjacencyGraph, Path};

/// Returns every path reachable from `path` by adding one vertex at either end.
///
/// An empty result means neither endpoint has an unused neighbor.
///
/// # Examples
///
/// ```
/// use u_pathsearch::models::{AdjacencyGraph, Path};
/// use u_pathsearch::neighborhood::expand;
///
/// let g = AdjacencyGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).expect("valid");
/// let grown = expand(&Path::from(vec![1, 2]), &g);
/// assert_eq!(grown, vec![Path::from(vec![0, 1, 2]), Path::from(vec![1, 2, 3])]);
/// ```
pub fn expand(path: &Path, graph: &AdjacencyGraph) -> Vec<Path> {
    let (Some(start), Some(finish)) = (path.first(), path.last()) else {
        return (0..graph.vertex_count()).map(Path::singleton).collect();
    };

    let front = graph
        .neighbors_of(start)
        .iter()
        .filter(|&&i| !path.contains(i))
        .map(|&i| path.prepended(i));
    let back = graph
        .neighbors_of(finish)
        .iter()
        .filter(|&&i| !path.contains(i))
        .map(|&i| path.appended(i));

    front.chain(back).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> AdjacencyGraph {
        let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
        AdjacencyGraph::from_edges(n, &edges).expect("valid")
    }

    #[test]
    fn test_expand_empty_yields_singletons() {
        let g = chain(4);
        let out = expand(&Path::new(), &g);
        let expected: Vec<Path> = (0..4).map(Path::singleton).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_expand_empty_graph() {
        let g = AdjacencyGraph::empty(0);
        assert!(expand(&Path::new(), &g).is_empty());
    }

    #[test]
    fn test_expand_singleton_both_sides() {
        let g = chain(3);
        // vertex 1 has neighbors [0, 2]; both ends are 1
        let out = expand(&Path::singleton(1), &g);
        assert_eq!(
            out,
            vec![
                Path::from(vec![0, 1]),
                Path::from(vec![2, 1]),
                Path::from(vec![1, 0]),
                Path::from(vec![1, 2]),
            ]
        );
    }

    #[test]
    fn test_expand_prepends_before_appends() {
        let g = AdjacencyGraph::from_edges(5, &[(2, 0), (2, 1), (2, 3), (3, 4)]).expect("valid");
        let p = Path::from(vec![2, 3]);
        let out = expand(&p, &g);
        assert_eq!(
            out,
            vec![
                Path::from(vec![0, 2, 3]),
                Path::from(vec![1, 2, 3]),
                Path::from(vec![2, 3, 4]),
            ]
        );
    }

    #[test]
    fn test_expand_skips_vertices_on_path() {
        let g = AdjacencyGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).expect("valid");
        // triangle fully covered
        assert!(expand(&Path::from(vec![0, 1, 2]), &g).is_empty());
    }

    #[test]
    fn test_expand_stuck_at_chain_end() {
        let g = chain(3);
        assert!(expand(&Path::from(vec![0, 1, 2]), &g).is_empty());
    }

    #[test]
    fn test_expand_isolated_vertex() {
        let g = AdjacencyGraph::empty(2);
        assert!(expand(&Path::singleton(0), &g).is_empty());
    }

    #[test]
    fn test_expand_keeps_parallel_duplicates() {
        let g = AdjacencyGraph::from_edges(2, &[(0, 1), (0, 1)]).expect("valid");
        let out = expand(&Path::singleton(0), &g);
        // two prepends and two appends through the doubled edge
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], Path::from(vec![1, 0]));
        assert_eq!(out[1], Path::from(vec![1, 0]));
        assert_eq!(out[2], Path::from(vec![0, 1]));
    }

    #[test]
    fn test_expand_ignores_self_loop() {
        let g = AdjacencyGraph::from_edges(1, &[(0, 0)]).expect("valid");
        assert!(expand(&Path::singleton(0), &g).is_empty());
    }
}
