//! Common interface over the four search strategies.
//!
//! Each strategy's config is also its [`Strategy`]: it knows which runner
//! to call and carries every tuning value that runner needs.

use crate::dfs::{DfsConfig, DfsRunner};
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::hill::{HillConfig, HillRunner};
use crate::instrument::Instruments;
use crate::sa::{SaConfig, SaRunner};
use crate::stats::{Solve, StrategyKind};

/// A configured search strategy for the `n`-queens problem.
///
/// # Examples
///
/// ```
/// use u_nqueens::{Instruments, Strategy};
/// use u_nqueens::sa::SaConfig;
///
/// let strategy: Box<dyn Strategy> = Box::new(SaConfig::default().with_seed(1));
/// let (solution, stats) = strategy.solve(6, &Instruments::system()).unwrap();
/// assert_eq!(solution.is_some(), stats.success);
/// ```
pub trait Strategy {
    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Searches for an `n`-queens placement.
    ///
    /// Only invalid input is an error; an unsuccessful search is reported
    /// through the returned statistics.
    fn solve(&self, n: usize, instruments: &Instruments) -> Result<Solve>;
}

impl Strategy for DfsConfig {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Exhaustive
    }

    fn solve(&self, n: usize, instruments: &Instruments) -> Result<Solve> {
        DfsRunner::run_instrumented(n, self, instruments)
    }
}

impl Strategy for HillConfig {
    fn kind(&self) -> StrategyKind {
        StrategyKind::HillClimbing
    }

    fn solve(&self, n: usize, instruments: &Instruments) -> Result<Solve> {
        HillRunner::run_instrumented(n, self, instruments)
    }
}

impl Strategy for SaConfig {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SimulatedAnnealing
    }

    fn solve(&self, n: usize, instruments: &Instruments) -> Result<Solve> {
        SaRunner::run_instrumented(n, self, instruments)
    }
}

impl Strategy for GaConfig {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Genetic
    }

    fn solve(&self, n: usize, instruments: &Instruments) -> Result<Solve> {
        GaRunner::run_instrumented(n, self, instruments)
    }
}
