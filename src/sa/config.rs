//! SA configuration.

use crate::error::{QueensError, Result};

/// Configuration for the Simulated Annealing strategy.
///
/// Size-dependent values (iteration budget, starting temperature) are
/// resolved per run from `n`.
///
/// # Examples
///
/// ```
/// use u_nqueens::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_iterations(20_000)
///     .with_cooling_rate(0.995)
///     .with_seed(42);
/// assert_eq!(config.max_iterations(8), 20_000);
/// assert!((config.initial_temperature(8) - 80.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Total neighbor evaluations. `None` = `1000 * n`.
    pub max_iterations: Option<usize>,

    /// Starting temperature per queen: `T_0 = initial_temperature_per_n * n`.
    pub initial_temperature_per_n: f64,

    /// Geometric cooling factor applied after every iteration: `T_{k+1} = rate * T_k`.
    pub cooling_rate: f64,

    /// Temperature below which a checkpoint reheats.
    pub reheat_threshold: f64,

    /// Fraction of `T_0` the temperature is reset to on reheating.
    pub reheat_fraction: f64,

    /// Worsening (and sideways) moves are only considered above this temperature.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            initial_temperature_per_n: 10.0,
            cooling_rate: 0.99,
            reheat_threshold: 1.0,
            reheat_fraction: 0.1,
            min_temperature: 0.01,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Fixes the iteration budget instead of `1000 * n`. The checkpoint
    /// interval follows it.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Starting temperature per queen.
    pub fn with_initial_temperature_per_n(mut self, t: f64) -> Self {
        self.initial_temperature_per_n = t;
        self
    }

    /// Geometric cooling factor, in `(0, 1)`.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Checkpoints with `T < threshold` reset `T` to `fraction * T_0`.
    pub fn with_reheat(mut self, threshold: f64, fraction: f64) -> Self {
        self.reheat_threshold = threshold;
        self.reheat_fraction = fraction;
        self
    }

    /// Temperature at or below which only improving moves are accepted.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Seeds the run for a reproducible trajectory.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Iteration budget on an `n`-queens board.
    pub fn max_iterations(&self, n: usize) -> usize {
        self.max_iterations.unwrap_or(1000 * n)
    }

    /// Starting temperature on an `n`-queens board.
    pub fn initial_temperature(&self, n: usize) -> f64 {
        self.initial_temperature_per_n * n as f64
    }

    /// Iterations between two reheating checkpoints (at least 1).
    pub fn checkpoint_interval(&self, n: usize) -> usize {
        (self.max_iterations(n) / 10).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_temperature_per_n <= 0.0 {
            return Err(QueensError::InvalidConfig(
                "initial_temperature_per_n must be positive".into(),
            ));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(QueensError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.reheat_fraction <= 0.0 || self.reheat_fraction > 1.0 {
            return Err(QueensError::InvalidConfig(format!(
                "reheat_fraction must be in (0, 1], got {}",
                self.reheat_fraction
            )));
        }
        if self.reheat_threshold < 0.0 || self.min_temperature < 0.0 {
            return Err(QueensError::InvalidConfig(
                "temperature thresholds must be non-negative".into(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(QueensError::InvalidConfig(
                "max_iterations must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!(config.max_iterations.is_none());
        assert_eq!(config.max_iterations(8), 8000);
        assert!((config.initial_temperature(8) - 80.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.99).abs() < 1e-15);
        assert_eq!(config.checkpoint_interval(8), 800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_checkpoint_interval_never_zero() {
        let config = SaConfig::default().with_max_iterations(5);
        assert_eq!(config.checkpoint_interval(8), 1);
    }

    #[test]
    fn test_validate_bad_cooling() {
        assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature_per_n(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_reheat() {
        assert!(SaConfig::default().with_reheat(1.0, 0.0).validate().is_err());
        assert!(SaConfig::default().with_reheat(-1.0, 0.1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(SaConfig::default().with_max_iterations(0).validate().is_err());
    }
}
