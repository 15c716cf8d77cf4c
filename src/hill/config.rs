//! Hill climbing configuration.

use crate::error::{QueensError, Result};

/// Configuration for [`HillRunner`](super::HillRunner).
///
/// # Examples
///
/// ```
/// use u_nqueens::hill::HillConfig;
///
/// let config = HillConfig::default().with_max_restarts(50).with_seed(7);
/// assert_eq!(config.max_restarts, 50);
/// assert_eq!(config.iterations_per_n, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillConfig {
    /// Maximum number of random restarts.
    pub max_restarts: usize,

    /// Descent steps allowed per restart, as a multiple of `n`.
    pub iterations_per_n: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            max_restarts: 100,
            iterations_per_n: 10,
            seed: None,
        }
    }
}

impl HillConfig {
    /// Caps the number of random starting boards.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Descent steps per restart, per queen.
    pub fn with_iterations_per_n(mut self, k: usize) -> Self {
        self.iterations_per_n = k;
        self
    }

    /// Seeds the run for a reproducible trajectory.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Descent budget of one restart on an `n`-queens board.
    pub fn max_iterations(&self, n: usize) -> usize {
        self.iterations_per_n * n
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_restarts == 0 {
            return Err(QueensError::InvalidConfig(
                "max_restarts must be at least 1".into(),
            ));
        }
        if self.iterations_per_n == 0 {
            return Err(QueensError::InvalidConfig(
                "iterations_per_n must be at least 1".into(),
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
        let config = HillConfig::default();
        assert_eq!(config.max_restarts, 100);
        assert_eq!(config.max_iterations(8), 80);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(HillConfig::default().with_max_restarts(0).validate().is_err());
        assert!(HillConfig::default().with_iterations_per_n(0).validate().is_err());
    }
}
