//! Backtracking search loop.

use super::config::DfsConfig;
use crate::board::UNPLACED;
use crate::error::{check_size, Result};
use crate::instrument::{Instruments, Meter};
use crate::stats::{Solve, SolveStats, StrategyKind};
use std::time::Duration;

/// Executes the exhaustive depth-first search.
pub struct DfsRunner;

impl DfsRunner {
    /// Searches for one `n`-queens placement with the system clock and
    /// memory probe.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::dfs::{DfsConfig, DfsRunner};
    ///
    /// let (solution, stats) = DfsRunner::run(8, &DfsConfig::default()).unwrap();
    /// assert_eq!(solution, Some(vec![0, 4, 7, 5, 2, 6, 1, 3]));
    /// assert!(stats.success);
    /// ```
    pub fn run(n: usize, config: &DfsConfig) -> Result<Solve> {
        Self::run_instrumented(n, config, &Instruments::system())
    }

    /// Searches using the given clock and memory probe.
    pub fn run_instrumented(
        n: usize,
        config: &DfsConfig,
        instruments: &Instruments,
    ) -> Result<Solve> {
        check_size(n)?;
        config.validate()?;

        let meter = Meter::start(instruments);
        let mut search = Search::new(n, config, &meter);
        let found = search.descend(0);
        debug_assert!(found || search.is_clear(), "constraint sets left dirty");

        let solution = found.then(|| search.board.clone());
        let mut stats = SolveStats::new(StrategyKind::Exhaustive, n);
        stats.work = search.nodes;
        stats.solutions_found = usize::from(found);
        stats.timed_out = search.timed_out;
        stats.success = found && !search.timed_out;

        let (elapsed, memory_delta) = meter.finish();
        stats.elapsed = elapsed;
        stats.memory_delta = memory_delta;

        log::debug!(
            "DFS n={}: nodes={}, success={}, timed_out={}, elapsed={:?}",
            n,
            stats.work,
            stats.success,
            stats.timed_out,
            stats.elapsed
        );
        Ok((solution, stats))
    }
}

/// State threaded through the recursion: the partial board, the three
/// occupancy sets, the node counter and the timeout flag.
struct Search<'m, 'i> {
    n: usize,
    board: Vec<usize>,
    columns: Vec<bool>,
    /// Indexed by `row + (n - 1) - col`.
    diagonals: Vec<bool>,
    /// Indexed by `row + col`.
    anti_diagonals: Vec<bool>,
    nodes: usize,
    timed_out: bool,
    timeout: Duration,
    check_interval: usize,
    meter: &'m Meter<'i>,
}

impl<'m, 'i> Search<'m, 'i> {
    fn new(n: usize, config: &DfsConfig, meter: &'m Meter<'i>) -> Self {
        Self {
            n,
            board: vec![UNPLACED; n],
            columns: vec![false; n],
            diagonals: vec![false; 2 * n - 1],
            anti_diagonals: vec![false; 2 * n - 1],
            nodes: 0,
            timed_out: false,
            timeout: config.timeout,
            check_interval: config.check_interval,
            meter,
        }
    }

    /// Places rows `row..n`. Returns `true` once the board is complete.
    fn descend(&mut self, row: usize) -> bool {
        self.nodes += 1;
        if self.nodes.is_multiple_of(self.check_interval) && self.meter.elapsed() > self.timeout {
            self.timed_out = true;
            return false;
        }

        if row == self.n {
            return true;
        }

        for col in 0..self.n {
            if self.timed_out {
                return false;
            }

            let diag = row + self.n - 1 - col;
            let anti = row + col;
            if self.columns[col] || self.diagonals[diag] || self.anti_diagonals[anti] {
                continue;
            }

            self.set(row, col, diag, anti, true);
            if self.descend(row + 1) {
                return true;
            }
            self.set(row, col, diag, anti, false);
        }
        false
    }

    fn set(&mut self, row: usize, col: usize, diag: usize, anti: usize, occupied: bool) {
        self.board[row] = if occupied { col } else { UNPLACED };
        self.columns[col] = occupied;
        self.diagonals[diag] = occupied;
        self.anti_diagonals[anti] = occupied;
    }

    /// No queen on the board and no occupancy left behind.
    fn is_clear(&self) -> bool {
        self.board.iter().all(|&c| c == UNPLACED)
            && !self.columns.iter().any(|&b| b)
            && !self.diagonals.iter().any(|&b| b)
            && !self.anti_diagonals.iter().any(|&b| b)
    }
}
