//! Permutation-preserving genetic operators.
//!
//! Crossover and mutation operators for permutation-encoded boards. Every
//! operator maps valid permutations of `0..n` to valid permutations.
//!
//! # Crossover Operators
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985): preserves absolute position
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: Exchange two distinct random positions, O(1)
//! - [`invert_mutation`]: Reverse a random segment, O(n)
//! - [`mutate`]: One of the two above, chosen with equal probability
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::ordered_pair;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX) for permutations.
///
/// Picks a random segment `[start, end)` with `start < end`, then builds
/// one child per parent with [`pmx_with_segment`].
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = ordered_pair(n, rng);
    pmx_with_segment(parent1, parent2, start, end)
}

/// PMX with a fixed segment `[start, end)`.
///
/// Child 1 takes the segment from `parent1` and resolves every other
/// position through `parent2`; child 2 is built symmetrically.
///
/// # Panics
/// Panics if parents have different lengths or the segment is out of range.
pub fn pmx_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end <= n, "segment [{start}, {end}) out of range for n = {n}");

    let child1 = pmx_build_child(parent1, parent2, start, end);
    let child2 = pmx_build_child(parent2, parent1, start, end);
    (child1, child2)
}

/// Build one PMX child: copy `template[start..end]`, resolve the rest from `donor`.
///
/// A position outside the segment first tries `donor[i]`. If that value is
/// already in the copied segment, it is replaced by the donor value found
/// at the same position the clashing value occupies in `template`, and so
/// on. Each hop lands on a distinct segment position (the position map
/// is a bijection and the chain starts outside the segment), so the chain
/// ends after at most `end - start` hops.
fn pmx_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = template.to_vec();
    let mut in_segment = vec![false; n];
    let mut template_pos = vec![0usize; n];

    for (i, &v) in template.iter().enumerate() {
        template_pos[v] = i;
    }
    for &v in &template[start..end] {
        in_segment[v] = true;
    }

    for i in (0..start).chain(end..n) {
        let mut val = donor[i];
        let mut hops = 0;
        while in_segment[val] {
            val = donor[template_pos[val]];
            hops += 1;
            debug_assert!(hops <= end - start, "PMX resolution chain exceeded segment length");
        }
        child[i] = val;
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if perm.len() < 2 {
        return;
    }
    let (i, j) = ordered_pair(perm.len(), rng);
    perm.swap(i, j);
}

/// Invert mutation: reverse the segment between two distinct random
/// positions, both ends included.
///
/// # Complexity
/// O(n) worst case for segment reversal
pub fn invert_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if perm.len() < 2 {
        return;
    }
    let (start, end) = ordered_pair(perm.len(), rng);
    perm[start..=end].reverse();
}

/// Applies [`swap_mutation`] or [`invert_mutation`] with equal probability.
pub fn mutate<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if rng.random_bool(0.5) {
        swap_mutation(perm, rng);
    } else {
        invert_mutation(perm, rng);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::is_valid_permutation;
    use crate::random::create_rng;

    // ---- PMX Crossover ----

    #[test]
    fn test_pmx_produces_valid_permutations() {
        let mut rng = create_rng(Some(42));
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![3, 7, 5, 1, 6, 0, 2, 4];

        for _ in 0..100 {
            let (c1, c2) = pmx_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&c1), "PMX child1 not valid: {c1:?}");
            assert!(is_valid_permutation(&c2), "PMX child2 not valid: {c2:?}");
        }
    }

    #[test]
    fn test_pmx_worked_example() {
        // Goldberg & Lingle style example with segment [3, 6).
        let p1 = [0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = [3, 7, 5, 1, 6, 0, 2, 4];
        let (c1, c2) = pmx_with_segment(&p1, &p2, 3, 6);

        // Segment copied from the child's own parent.
        assert_eq!(&c1[3..6], &[3, 4, 5]);
        assert_eq!(&c2[3..6], &[1, 6, 0]);
        // 3 -> p2[pos of 3 in p1 = 3] = 1 ; 5 -> p2[5] = 0 ; 4 -> p2[4] = 6
        assert_eq!(c1, vec![1, 7, 0, 3, 4, 5, 2, 6]);
        assert_eq!(c2, vec![5, 3, 2, 1, 6, 0, 4, 7]);
    }

    #[test]
    fn test_pmx_long_chain() {
        // Resolving position 0 of child 1 walks the whole segment.
        let p1 = [0, 1, 2, 3, 4];
        let p2 = [1, 2, 3, 4, 0];
        let (c1, c2) = pmx_with_segment(&p1, &p2, 1, 5);
        assert_eq!(c1, vec![0, 1, 2, 3, 4]);
        assert!(is_valid_permutation(&c2));
    }

    #[test]
    fn test_pmx_empty_and_full_segments() {
        let p1 = [2, 0, 3, 1];
        let p2 = [1, 3, 0, 2];
        let (c1, c2) = pmx_with_segment(&p1, &p2, 2, 2);
        assert_eq!(c1, p2.to_vec());
        assert_eq!(c2, p1.to_vec());

        let (c1, c2) = pmx_with_segment(&p1, &p2, 0, 4);
        assert_eq!(c1, p1.to_vec());
        assert_eq!(c2, p2.to_vec());
    }

    #[test]
    fn test_pmx_single_element() {
        let mut rng = create_rng(Some(42));
        let (c1, c2) = pmx_crossover(&[0], &[0], &mut rng);
        assert_eq!(c1, vec![0]);
        assert_eq!(c2, vec![0]);
    }

    #[test]
    fn test_pmx_identical_parents() {
        let mut rng = create_rng(Some(42));
        let p = vec![0, 1, 2, 3, 4];
        let (c1, c2) = pmx_crossover(&p, &p, &mut rng);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }

    // ---- Mutation ----

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = create_rng(Some(42));
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            swap_mutation(&mut perm, &mut rng);
            assert!(is_valid_permutation(&perm));
            let moved = perm.iter().enumerate().filter(|&(i, &v)| i != v).count();
            assert_eq!(moved, 2);
        }
    }

    #[test]
    fn test_invert_reverses_segment() {
        let mut rng = create_rng(Some(42));
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            invert_mutation(&mut perm, &mut rng);
            assert!(is_valid_permutation(&perm));
            assert_ne!(perm, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_mutation_single_element() {
        let mut rng = create_rng(Some(42));
        let mut perm = vec![0];
        mutate(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_mutate_uses_both_operators() {
        // A swap always displaces exactly two values; reversing four or
        // more positions displaces more. Both shapes must show up.
        let mut rng = create_rng(Some(7));
        let mut saw_swap_shape = false;
        let mut saw_reverse_shape = false;
        for _ in 0..500 {
            let mut perm: Vec<usize> = (0..6).collect();
            mutate(&mut perm, &mut rng);
            let moved = perm.iter().enumerate().filter(|&(i, &v)| i != v).count();
            if moved == 2 {
                saw_swap_shape = true;
            } else if moved >= 3 {
                saw_reverse_shape = true;
            }
        }
        assert!(saw_swap_shape && saw_reverse_shape);
    }

    // ---- Integration: crossover + mutation pipeline ----

    #[test]
    fn test_pmx_pipeline_preserves_validity() {
        let mut rng = create_rng(Some(42));
        let p1: Vec<usize> = (0..15).collect();
        let mut p2: Vec<usize> = (0..15).collect();
        p2.reverse();

        for _ in 0..50 {
            let (mut c1, mut c2) = pmx_crossover(&p1, &p2, &mut rng);
            mutate(&mut c1, &mut rng);
            mutate(&mut c2, &mut rng);
            assert!(is_valid_permutation(&c1), "pipeline c1 invalid: {c1:?}");
            assert!(is_valid_permutation(&c2), "pipeline c2 invalid: {c2:?}");
        }
    }
}
