//! Benchmark execution.

use super::config::HarnessConfig;
use super::summary::StrategySummary;
use crate::error::Result;
use crate::instrument::Instruments;
use crate::stats::{SolveStats, StrategyKind};
use crate::strategy::Strategy;

/// One strategy invocation: its statistics and the board it returned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    pub stats: SolveStats,
    pub solution: Option<Vec<usize>>,
}

/// All records of a benchmark, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkReport {
    pub records: Vec<RunRecord>,
}

impl BenchmarkReport {
    /// Records of one strategy.
    pub fn for_strategy(&self, kind: StrategyKind) -> impl Iterator<Item = &RunRecord> {
        self.records.iter().filter(move |r| r.stats.strategy == kind)
    }

    /// Per-strategy aggregates, in [`StrategyKind::ALL`] order, for every
    /// strategy that has at least one record.
    pub fn summary(&self) -> Vec<StrategySummary> {
        StrategyKind::ALL
            .iter()
            .filter_map(|&kind| {
                StrategySummary::from_stats(kind, self.for_strategy(kind).map(|r| &r.stats))
            })
            .collect()
    }
}

/// Runs a [`HarnessConfig`] plan.
pub struct Harness;

impl Harness {
    /// Runs the plan with the system clock and memory probe.
    pub fn run(config: &HarnessConfig) -> Result<BenchmarkReport> {
        Self::run_instrumented(config, &Instruments::system())
    }

    /// Runs the plan using the given clock and memory probe.
    ///
    /// The whole plan is validated before the first run starts.
    pub fn run_instrumented(
        config: &HarnessConfig,
        instruments: &Instruments,
    ) -> Result<BenchmarkReport> {
        config.validate()?;

        let mut report = BenchmarkReport::default();
        let mut run_index = 0u64;

        for &n in &config.sizes {
            log::info!("Testing N = {n}");
            for &kind in &config.strategies {
                let seed = config.seed.map(|s| s.wrapping_add(run_index));
                run_index += 1;

                let strategy = strategy_for(config, kind, n, seed);
                log::info!("Running {kind} on N = {n}");
                let (solution, stats) = strategy.solve(n, instruments)?;
                log::info!(
                    "{kind} N = {n}: success={}, timed_out={}, work={}, elapsed={:?}",
                    stats.success,
                    stats.timed_out,
                    stats.work,
                    stats.elapsed
                );
                report.records.push(RunRecord { stats, solution });
            }
        }
        Ok(report)
    }
}

/// Builds the configured strategy for one run, applying the size-dependent
/// timeout and the derived seed where the strategy has none of its own.
fn strategy_for(
    config: &HarnessConfig,
    kind: StrategyKind,
    n: usize,
    seed: Option<u64>,
) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Exhaustive => Box::new(
            config
                .dfs
                .clone()
                .with_timeout(config.timeout_policy.timeout_for(n)),
        ),
        StrategyKind::HillClimbing => {
            let mut hill = config.hill.clone();
            hill.seed = hill.seed.or(seed);
            Box::new(hill)
        }
        StrategyKind::SimulatedAnnealing => {
            let mut sa = config.sa.clone();
            sa.seed = sa.seed.or(seed);
            Box::new(sa)
        }
        StrategyKind::Genetic => {
            let mut ga = config.ga.clone();
            ga.seed = ga.seed.or(seed);
            Box::new(ga)
        }
    }
}
