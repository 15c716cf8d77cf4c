//! Exhaustive search configuration.

use std::time::Duration;

use crate::error::{QueensError, Result};

/// Configuration for [`DfsRunner`](super::DfsRunner).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_nqueens::dfs::DfsConfig;
///
/// let config = DfsConfig::default().with_timeout(Duration::from_secs(30));
/// assert_eq!(config.check_interval, 10_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsConfig {
    /// Wall-clock budget. Once exceeded the search unwinds and reports a timeout.
    pub timeout: Duration,

    /// Number of nodes between two clock reads.
    pub check_interval: usize,
}

impl Default for DfsConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
            check_interval: 10_000,
        }
    }
}

impl DfsConfig {
    /// Wall-clock budget for one search.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Same as [`with_timeout`](Self::with_timeout), in whole seconds.
    pub fn with_timeout_secs(self, secs: u64) -> Self {
        self.with_timeout(Duration::from_secs(secs))
    }

    /// Nodes between clock reads. A timeout can overshoot by up to this many
    /// nodes.
    pub fn with_check_interval(mut self, nodes: usize) -> Self {
        self.check_interval = nodes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.check_interval == 0 {
            return Err(QueensError::InvalidConfig(
                "check_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
