//! Random source trait and seeded generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random draws a search strategy makes.
///
/// Every [`rand::Rng`] is a `RandomSource`, so seeded generators plug in
/// directly; tests can substitute a scripted source to pin branches.
pub trait RandomSource {
    /// Uniform index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `len == 0`.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform real in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates a deterministic generator from `seed`.
///
/// # Examples
///
/// ```
/// use u_pathsearch::random::{create_rng, RandomSource};
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.index(100), b.index(100));
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
