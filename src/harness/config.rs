//! Harness configuration.

use std::time::Duration;

use crate::dfs::DfsConfig;
use crate::error::{QueensError, Result};
use crate::ga::GaConfig;
use crate::hill::HillConfig;
use crate::sa::SaConfig;
use crate::stats::StrategyKind;

/// Exhaustive-search timeout as a function of board size.
///
/// Tiers are `(max_n, timeout)` pairs checked in order; the first tier with
/// `n <= max_n` applies, otherwise `fallback`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeoutPolicy {
    pub tiers: Vec<(usize, Duration)>,
    pub fallback: Duration,
}

impl TimeoutPolicy {
    /// The same timeout for every size.
    pub fn fixed(timeout: Duration) -> Self {
        Self {
            tiers: Vec::new(),
            fallback: timeout,
        }
    }

    pub fn timeout_for(&self, n: usize) -> Duration {
        self.tiers
            .iter()
            .find(|&&(max_n, _)| n <= max_n)
            .map_or(self.fallback, |&(_, timeout)| timeout)
    }
}

impl Default for TimeoutPolicy {
    /// One minute up to n = 30, five minutes up to n = 100, ten beyond.
    fn default() -> Self {
        Self {
            tiers: vec![
                (30, Duration::from_secs(60)),
                (100, Duration::from_secs(300)),
            ],
            fallback: Duration::from_secs(600),
        }
    }
}

/// What to benchmark and how.
///
/// # Examples
///
/// ```
/// use u_nqueens::harness::HarnessConfig;
/// use u_nqueens::StrategyKind;
///
/// let config = HarnessConfig::default()
///     .with_sizes(vec![8, 12])
///     .with_strategies(vec![StrategyKind::Exhaustive, StrategyKind::SimulatedAnnealing])
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarnessConfig {
    /// Board sizes, run in order.
    pub sizes: Vec<usize>,

    /// Strategies run on every size, in order.
    pub strategies: Vec<StrategyKind>,

    /// Overrides `dfs.timeout` per size.
    pub timeout_policy: TimeoutPolicy,

    pub dfs: DfsConfig,
    pub hill: HillConfig,
    pub sa: SaConfig,
    pub ga: GaConfig,

    /// Base seed. Each run without its own seed gets `seed + run index`.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 30, 50, 100, 200],
            strategies: StrategyKind::ALL.to_vec(),
            timeout_policy: TimeoutPolicy::default(),
            dfs: DfsConfig::default(),
            hill: HillConfig::default(),
            sa: SaConfig::default(),
            ga: GaConfig::default(),
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Every strategy once on the 8-queens board, exhaustive search capped at 30 s.
    pub fn quick_check() -> Self {
        Self {
            sizes: vec![8],
            timeout_policy: TimeoutPolicy::fixed(Duration::from_secs(30)),
            ..Self::default()
        }
    }

    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.timeout_policy = policy;
        self
    }

    pub fn with_dfs(mut self, config: DfsConfig) -> Self {
        self.dfs = config;
        self
    }

    pub fn with_hill(mut self, config: HillConfig) -> Self {
        self.hill = config;
        self
    }

    pub fn with_sa(mut self, config: SaConfig) -> Self {
        self.sa = config;
        self
    }

    pub fn with_ga(mut self, config: GaConfig) -> Self {
        self.ga = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the plan and every strategy config it would use.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(QueensError::InvalidConfig("sizes must not be empty".into()));
        }
        if let Some(&n) = self.sizes.iter().find(|&&n| n == 0) {
            return Err(QueensError::InvalidSize { n });
        }
        if self.strategies.is_empty() {
            return Err(QueensError::InvalidConfig(
                "strategies must not be empty".into(),
            ));
        }
        self.dfs.validate()?;
        self.hill.validate()?;
        self.sa.validate()?;
        self.ga.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_policy() {
        let policy = TimeoutPolicy::default();
        assert_eq!(policy.timeout_for(10), Duration::from_secs(60));
        assert_eq!(policy.timeout_for(30), Duration::from_secs(60));
        assert_eq!(policy.timeout_for(31), Duration::from_secs(300));
        assert_eq!(policy.timeout_for(100), Duration::from_secs(300));
        assert_eq!(policy.timeout_for(200), Duration::from_secs(600));
    }

    #[test]
    fn test_fixed_policy() {
        let policy = TimeoutPolicy::fixed(Duration::from_millis(5));
        assert_eq!(policy.timeout_for(1), Duration::from_millis(5));
        assert_eq!(policy.timeout_for(1000), Duration::from_millis(5));
    }

    #[test]
    fn test_default_plan() {
        let config = HarnessConfig::default();
        assert_eq!(config.sizes, vec![10, 30, 50, 100, 200]);
        assert_eq!(config.strategies.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quick_check() {
        let config = HarnessConfig::quick_check();
        assert_eq!(config.sizes, vec![8]);
        assert_eq!(config.timeout_policy.timeout_for(8), Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_bad_plans() {
        assert!(HarnessConfig::default().with_sizes(vec![]).validate().is_err());
        assert_eq!(
            HarnessConfig::default().with_sizes(vec![8, 0]).validate(),
            Err(QueensError::InvalidSize { n: 0 })
        );
        assert!(HarnessConfig::default()
            .with_strategies(vec![])
            .validate()
            .is_err());
        assert!(HarnessConfig::default()
            .with_ga(GaConfig::default().with_population_size(1))
            .validate()
            .is_err());
    }
}
