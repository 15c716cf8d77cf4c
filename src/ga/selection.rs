//! Parent selection for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use crate::random::sample_indices;
use rand::Rng;

/// Tournament selection: sample `k` distinct individuals uniformly and
/// return the index of the fittest. Ties go to the first one sampled.
///
/// Higher `k` = stronger selection pressure. When `k` exceeds the
/// population, the whole population competes.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let contenders = sample_indices(population.len(), k.max(1), rng);
    let mut best_idx = contenders[0];
    for &idx in &contenders[1..] {
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn population(fitness: &[usize]) -> Vec<Individual> {
        fitness
            .iter()
            .map(|&f| Individual {
                genes: Vec::new(),
                fitness: f,
            })
            .collect()
    }

    #[test]
    fn test_tournament_full_population_picks_best() {
        let pop = population(&[3, 9, 1, 4]);
        let mut rng = create_rng(Some(42));
        for _ in 0..50 {
            assert_eq!(tournament(&pop, 4, &mut rng), 1);
            assert_eq!(tournament(&pop, 10, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_never_picks_worst_with_k3() {
        // With 3 distinct contenders out of 4, the worst can never win.
        let pop = population(&[5, 2, 8, 0]);
        let mut rng = create_rng(Some(1));
        for _ in 0..200 {
            assert_ne!(tournament(&pop, 3, &mut rng), 3);
        }
    }

    #[test]
    fn test_tournament_selection_pressure() {
        let pop = population(&(0..20).collect::<Vec<_>>());
        let mut rng = create_rng(Some(42));
        let total: usize = (0..1000).map(|_| pop[tournament(&pop, 3, &mut rng)].fitness).sum();
        let mean = total as f64 / 1000.0;
        // Uniform mean would be 9.5; the best-of-3 mean is about 14.
        assert!(mean > 12.0, "mean selected fitness {mean}");
    }

    #[test]
    fn test_tournament_size_one_is_uniform_pick() {
        let pop = population(&[1, 1, 1]);
        let mut rng = create_rng(Some(5));
        let idx = tournament(&pop, 1, &mut rng);
        assert!(idx < 3);
    }
}
