//! Energy model over paths.

use crate::models::Path;

/// Energy assigned to the empty path, worse than any non-empty path.
pub const EMPTY_PATH_ENERGY: f64 = 2.0;

/// Returns the energy of `path`: `1 / len` for a non-empty path,
/// [`EMPTY_PATH_ENERGY`] otherwise.
///
/// # Examples
///
/// ```
/// use u_pathsearch::evaluation::energy;
/// use u_pathsearch::models::Path;
///
/// assert_eq!(energy(&Path::new()), 2.0);
/// assert_eq!(energy(&Path::from(vec![0, 1, 2, 3])), 0.25);
/// ```
pub fn energy(path: &Path) -> f64 {
    if path.is_empty() {
        return EMPTY_PATH_ENERGY;
    }
    1.0 / path.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_energy() {
        assert_eq!(energy(&Path::new()), 2.0);
    }

    #[test]
    fn test_singleton_energy() {
        assert_eq!(energy(&Path::singleton(0)), 1.0);
    }

    #[test]
    fn test_energy_strictly_decreasing() {
        let mut prev = energy(&Path::new());
        for n in 1..50 {
            let e = energy(&Path::from((0..n).collect::<Vec<_>>()));
            assert!((e - 1.0 / n as f64).abs() < 1e-15);
            assert!(e < prev);
            prev = e;
        }
    }
}
