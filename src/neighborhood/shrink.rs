//! One-vertex path truncation.

use crate::models::Path;

/// Returns the paths reachable from `path` by dropping one endpoint.
///
/// The empty path has no shrinks. Any other path has exactly two: without
/// its first vertex, then without its last. For a single-vertex path both
/// are empty.
///
/// # Examples
///
/// ```
/// use u_pathsearch::models::Path;
/// use u_pathsearch::neighborhood::shrink;
///
/// let out = shrink(&Path::from(vec![3, 1, 4]));
/// assert_eq!(out, vec![Path::from(vec![1, 4]), Path::from(vec![3, 1])]);
/// assert!(shrink(&Path::new()).is_empty());
/// ```
pub fn shrink(path: &Path) -> Vec<Path> {
    if path.is_empty() {
        return Vec::new();
    }
    vec![path.without_first(), path.without_last()]
}
