//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{QueensError, Result};

/// Configuration for the Genetic Algorithm.
///
/// Population size and generation cap default to values derived from the
/// board size and are resolved per run.
///
/// # Defaults
///
/// ```
/// use u_nqueens::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size(8), 50);
/// assert_eq!(config.population_size(40), 80);
/// assert_eq!(config.max_generations(8), 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nqueens::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_elite_ratio(0.1)
///     .with_mutation_rate(0.2);
/// assert_eq!(config.population_size(8), 200);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals. `None` = `clamp(2n, 50, 100)`.
    pub population_size: Option<usize>,

    /// Generation cap. `None` = `clamp(10n, 100, 1000)`.
    pub max_generations: Option<usize>,

    /// Fraction of the population copied unchanged to the next generation.
    pub elite_ratio: f64,

    /// Individuals sampled per tournament.
    pub tournament_size: usize,

    /// Probability of applying PMX to a pair of parents. Otherwise both are cloned.
    pub crossover_rate: f64,

    /// Probability of mutating each child (swap or segment reversal, 50/50).
    pub mutation_rate: f64,

    /// Seed for the run. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: None,
            max_generations: None,
            elite_ratio: 0.2,
            tournament_size: 3,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Fixes the population size instead of deriving it from `n`.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }

    /// Fixes the generation cap instead of deriving it from `n`. Also
    /// scales the stagnation limit.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Fraction of each generation carried over unchanged, clamped to `[0, 1]`.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Contenders per parent selection.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// PMX probability per parent pair, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Per-child mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Seeds the run for a reproducible trajectory.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population size for an `n`-queens board.
    pub fn population_size(&self, n: usize) -> usize {
        self.population_size.unwrap_or_else(|| (2 * n).clamp(50, 100))
    }

    /// Generation cap for an `n`-queens board.
    pub fn max_generations(&self, n: usize) -> usize {
        self.max_generations.unwrap_or_else(|| (10 * n).clamp(100, 1000))
    }

    /// Number of elites kept for a given population size.
    pub fn elite_count(&self, population_size: usize) -> usize {
        (population_size as f64 * self.elite_ratio) as usize
    }

    /// Consecutive non-improving generations tolerated before stopping.
    pub fn stagnation_limit(&self, n: usize) -> usize {
        self.max_generations(n) / 10
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size.is_some_and(|p| p < 2) {
            return Err(QueensError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_generations == Some(0) {
            return Err(QueensError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(QueensError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        // Checked against the smallest population the config can produce.
        let population = self.population_size.unwrap_or(50);
        if self.elite_count(population) >= population {
            return Err(QueensError::InvalidConfig(
                "elite_ratio too high: elites fill entire population".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_from_board_size() {
        let config = GaConfig::default();
        assert!(config.validate().is_ok());
        // 2n clamped to [50, 100]
        assert_eq!(config.population_size(4), 50);
        assert_eq!(config.population_size(25), 50);
        assert_eq!(config.population_size(30), 60);
        assert_eq!(config.population_size(50), 100);
        assert_eq!(config.population_size(200), 100);
        // 10n clamped to [100, 1000]
        assert_eq!(config.max_generations(4), 100);
        assert_eq!(config.max_generations(50), 500);
        assert_eq!(config.max_generations(200), 1000);
    }

    #[test]
    fn test_derived_limits_follow_board_size() {
        let config = GaConfig::default();
        assert_eq!(config.stagnation_limit(3), 10);
        assert_eq!(config.stagnation_limit(50), 50);
        assert_eq!(config.stagnation_limit(500), 100);
        assert_eq!(config.elite_count(config.population_size(8)), 10);
        assert_eq!(config.elite_count(config.population_size(40)), 16);
    }

    #[test]
    fn test_fixed_sizes_ignore_board_size() {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_max_generations(40);
        for n in [1, 8, 300] {
            assert_eq!(config.population_size(n), 12);
            assert_eq!(config.max_generations(n), 40);
            assert_eq!(config.stagnation_limit(n), 4);
        }
        assert_eq!(config.elite_count(12), 2);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_population_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elites_against_derived_population() {
        // 0.99 of the smallest derived population (50) is 49 elites: one child slot.
        assert!(GaConfig::default().with_elite_ratio(0.99).validate().is_ok());
        assert!(GaConfig::default().with_elite_ratio(1.0).validate().is_err());
        // 0.5 of a fixed population of 2 keeps one elite and breeds one child.
        let tiny = GaConfig::default()
            .with_population_size(2)
            .with_elite_ratio(0.5);
        assert!(tiny.validate().is_ok());
    }

    #[test]
    fn test_rates_are_probabilities() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert_eq!(config.crossover_rate, 0.0);
        assert_eq!(config.mutation_rate, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_tournament_rejected() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }
}
