//! Population member.

use crate::board::{count_conflicts, max_conflicts};

/// A permutation board with its cached fitness.
///
/// Fitness is `n * (n - 1) / 2 - conflicts`: higher is better and the
/// maximum marks a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub genes: Vec<usize>,
    pub fitness: usize,
}

impl Individual {
    /// Wraps `genes` and evaluates it.
    pub fn new(genes: Vec<usize>) -> Self {
        let fitness = fitness(&genes);
        Self { genes, fitness }
    }

    pub fn conflicts(&self) -> usize {
        max_conflicts(self.genes.len()) - self.fitness
    }
}

/// Fitness of a permutation board.
pub fn fitness(genes: &[usize]) -> usize {
    max_conflicts(genes.len()).saturating_sub(count_conflicts(genes))
}
