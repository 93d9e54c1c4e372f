//! Candidate proposal and Metropolis acceptance shared by both Metropolis
//! strategies.

use crate::evaluation::energy;
use crate::models::Path;
use crate::random::RandomSource;

/// Picks the next candidate from the expansion and shrink sets.
///
/// Expansions are chosen when `(u <= expand_bias && expansions non-empty)
/// || shrinks empty`, with `u` drawn first on every call. An empty shrink
/// set overrides the draw. Returns `None` only when both sets are empty.
pub(crate) fn propose<'a, R>(
    expansions: &'a [Path],
    shrinks: &'a [Path],
    expand_bias: f64,
    rng: &mut R,
) -> Option<&'a Path>
where
    R: RandomSource + ?Sized,
{
    let u = rng.unit();
    let pool = if (u <= expand_bias && !expansions.is_empty()) || shrinks.is_empty() {
        expansions
    } else {
        shrinks
    };
    if pool.is_empty() {
        return None;
    }
    Some(&pool[rng.index(pool.len())])
}

/// Probability of moving to a candidate whose energy is `delta` higher.
pub(crate) fn worse_probability(delta: f64, temperature: f64) -> f64 {
    (-delta / temperature).exp()
}

/// Metropolis criterion: strict improvements always pass, anything else
/// passes with probability `exp(-(E(candidate) - E(current)) / T)`.
///
/// No random draw is made for a strict improvement.
pub(crate) fn accepts<R>(current: &Path, candidate: &Path, temperature: f64, rng: &mut R) -> bool
where
    R: RandomSource + ?Sized,
{
    let (e_current, e_candidate) = (energy(current), energy(candidate));
    e_candidate < e_current || rng.unit() < worse_probability(e_candidate - e_current, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::scripted::ScriptedSource;

    fn sets() -> (Vec<Path>, Vec<Path>) {
        let expansions = vec![Path::from(vec![0, 1]), Path::from(vec![1, 2])];
        let shrinks = vec![Path::new(), Path::new()];
        (expansions, shrinks)
    }

    #[test]
    fn test_pi_one_always_expands() {
        let (ex, sh) = sets();
        let mut rng = ScriptedSource::new(&[0.999_999], &[1]);
        assert_eq!(propose(&ex, &sh, 1.0, &mut rng), Some(&ex[1]));
    }

    #[test]
    fn test_pi_zero_shrinks_unless_draw_is_zero() {
        let (ex, sh) = sets();
        let mut rng = ScriptedSource::new(&[0.3], &[0]);
        assert_eq!(propose(&ex, &sh, 0.0, &mut rng), Some(&sh[0]));
        // u <= pi holds with equality at u = 0
        let mut rng = ScriptedSource::new(&[0.0], &[0]);
        assert_eq!(propose(&ex, &sh, 0.0, &mut rng), Some(&ex[0]));
    }

    #[test]
    fn test_empty_shrinks_overrides_draw() {
        let (ex, _) = sets();
        let mut rng = ScriptedSource::new(&[0.9], &[0]);
        assert_eq!(propose(&ex, &[], 0.0, &mut rng), Some(&ex[0]));
    }

    #[test]
    fn test_empty_expansions_falls_to_shrinks() {
        let (_, sh) = sets();
        let mut rng = ScriptedSource::new(&[0.0], &[1]);
        assert_eq!(propose(&[], &sh, 1.0, &mut rng), Some(&sh[1]));
    }

    #[test]
    fn test_both_empty_yields_none() {
        let mut rng = ScriptedSource::new(&[0.5], &[]);
        assert_eq!(propose(&[], &[], 0.5, &mut rng), None);
    }

    #[test]
    fn test_improvement_accepted_without_draw() {
        let mut rng = ScriptedSource::new(&[], &[]);
        let longer = Path::from(vec![0, 1]);
        assert!(accepts(&Path::singleton(0), &longer, 1e-9, &mut rng));
    }

    #[test]
    fn test_worse_candidate_uses_draw() {
        let current = Path::from(vec![0, 1]);
        let shorter = Path::singleton(0);
        // dE = 1 - 0.5 = 0.5; at T = 0.5 the probability is e^-1 ~ 0.368
        let mut low = ScriptedSource::new(&[0.3], &[]);
        assert!(accepts(&current, &shorter, 0.5, &mut low));
        let mut high = ScriptedSource::new(&[0.4], &[]);
        assert!(!accepts(&current, &shorter, 0.5, &mut high));
    }

    #[test]
    fn test_worse_probability_bounds() {
        assert_eq!(worse_probability(0.0, 3.0), 1.0);
        let p = worse_probability(0.5, 15_000.0);
        assert!(p > 0.999 && p < 1.0);
        assert!(worse_probability(1.0, 1e-6) < 1e-100);
    }
}
