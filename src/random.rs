//! Uniform random primitives used by the stochastic strategies.
//!
//! Seeding is the caller's concern: every strategy config carries an
//! optional seed, and `None` draws a fresh one from the thread RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates the RNG for one strategy invocation.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Picks two distinct indices in `0..n`, uniformly.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let i = rng.random_range(0..n);
    // Draw from the n - 1 remaining slots and skip over i.
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// Picks two distinct indices in `0..n` and returns them in ascending order.
pub fn ordered_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let (i, j) = distinct_pair(n, rng);
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}

/// Samples `k` distinct indices from `0..n` (all of them when `k >= n`).
pub fn sample_indices<R: Rng>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    rand::seq::index::sample(rng, n, k.min(n)).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::is_valid_permutation;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = random_permutation(20, &mut create_rng(Some(7)));
        let b = random_permutation(20, &mut create_rng(Some(7)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_permutation_valid() {
        let mut rng = create_rng(Some(42));
        for n in 0..30 {
            let perm = random_permutation(n, &mut rng);
            assert_eq!(perm.len(), n);
            assert!(is_valid_permutation(&perm));
        }
    }

    #[test]
    fn test_distinct_pair() {
        let mut rng = create_rng(Some(42));
        let mut hit_last = false;
        for _ in 0..1000 {
            let (i, j) = distinct_pair(5, &mut rng);
            assert_ne!(i, j);
            assert!(i < 5 && j < 5);
            hit_last |= j == 4;
        }
        assert!(hit_last);
    }

    #[test]
    fn test_ordered_pair() {
        let mut rng = create_rng(Some(3));
        for _ in 0..200 {
            let (i, j) = ordered_pair(2, &mut rng);
            assert_eq!((i, j), (0, 1));
        }
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = create_rng(Some(42));
        let picked = sample_indices(10, 3, &mut rng);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|&i| i < 10));
        assert!(picked[0] != picked[1] && picked[1] != picked[2] && picked[0] != picked[2]);
        assert_eq!(sample_indices(2, 3, &mut rng).len(), 2);
    }
}
