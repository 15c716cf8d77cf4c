//! Per-strategy aggregation of statistics records.

use std::time::Duration;

use crate::stats::{SolveStats, StrategyKind};

/// Aggregate over every run of one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategySummary {
    pub strategy: StrategyKind,
    pub runs: usize,
    pub successes: usize,

    /// Mean elapsed time over successful runs only.
    pub mean_success_elapsed: Option<Duration>,

    /// Mean memory delta over successful runs only, in bytes.
    pub mean_success_memory: Option<i64>,

    /// Largest board size solved.
    pub max_n_solved: Option<usize>,

    pub timeouts: usize,

    /// Sum of the work counters of all runs.
    pub total_work: usize,
}

impl StrategySummary {
    /// Aggregates the records of `strategy`. Returns `None` when there are none.
    pub fn from_stats<'a>(
        strategy: StrategyKind,
        records: impl IntoIterator<Item = &'a SolveStats>,
    ) -> Option<Self> {
        let mut summary = Self {
            strategy,
            runs: 0,
            successes: 0,
            mean_success_elapsed: None,
            mean_success_memory: None,
            max_n_solved: None,
            timeouts: 0,
            total_work: 0,
        };
        let mut elapsed_sum = Duration::ZERO;
        let mut memory_sum = 0i64;

        for stats in records.into_iter().filter(|s| s.strategy == strategy) {
            summary.runs += 1;
            summary.total_work += stats.work;
            if stats.timed_out {
                summary.timeouts += 1;
            }
            if stats.success {
                summary.successes += 1;
                elapsed_sum += stats.elapsed;
                memory_sum += stats.memory_delta;
                summary.max_n_solved = summary.max_n_solved.max(Some(stats.n));
            }
        }

        if summary.runs == 0 {
            return None;
        }
        if summary.successes > 0 {
            summary.mean_success_elapsed = Some(elapsed_sum / summary.successes as u32);
            summary.mean_success_memory = Some(memory_sum / summary.successes as i64);
        }
        Some(summary)
    }

    /// Fraction of runs that returned a solution.
    pub fn success_rate(&self) -> f64 {
        self.successes as f64 / self.runs as f64
    }
}
