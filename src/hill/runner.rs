//! Hill climbing loop.

use super::config::HillConfig;
use crate::board::count_conflicts;
use crate::error::{check_size, Result};
use crate::instrument::{Instruments, Meter};
use crate::random::{create_rng, random_permutation};
use crate::stats::{Solve, SolveStats, StrategyKind};

/// Executes hill climbing with random restarts.
pub struct HillRunner;

impl HillRunner {
    /// Runs hill climbing with the system clock and memory probe.
    ///
    /// The returned board is the lowest-conflict board seen across all
    /// restarts. It is a solution only when `stats.success` is set.
    pub fn run(n: usize, config: &HillConfig) -> Result<Solve> {
        Self::run_instrumented(n, config, &Instruments::system())
    }

    /// Runs hill climbing using the given clock and memory probe.
    pub fn run_instrumented(
        n: usize,
        config: &HillConfig,
        instruments: &Instruments,
    ) -> Result<Solve> {
        check_size(n)?;
        config.validate()?;

        let meter = Meter::start(instruments);
        let mut rng = create_rng(config.seed);
        let max_iterations = config.max_iterations(n);

        let mut best = Vec::new();
        let mut best_conflicts = usize::MAX;
        let mut total_iterations = 0usize;
        let mut restarts = 0usize;
        let mut history = Vec::new();

        while restarts < config.max_restarts {
            restarts += 1;

            let mut board = random_permutation(n, &mut rng);
            let mut conflicts = count_conflicts(&board);
            let mut iterations = 0usize;

            while conflicts > 0 && iterations < max_iterations {
                iterations += 1;
                total_iterations += 1;

                match steepest_move(&mut board, conflicts) {
                    Some(mv) => {
                        board[mv.row] = mv.col;
                        conflicts = mv.conflicts;
                    }
                    // Local optimum: abandon this restart.
                    None => break,
                }
            }

            if conflicts < best_conflicts {
                best_conflicts = conflicts;
                best = board;
            }
            history.push(best_conflicts);

            if best_conflicts == 0 {
                break;
            }
        }

        let mut stats = SolveStats::new(StrategyKind::HillClimbing, n);
        stats.work = total_iterations;
        stats.restarts = restarts;
        stats.final_conflicts = Some(best_conflicts);
        stats.success = best_conflicts == 0;
        stats.history = history;

        let (elapsed, memory_delta) = meter.finish();
        stats.elapsed = elapsed;
        stats.memory_delta = memory_delta;

        log::debug!(
            "Hill climbing n={}: restarts={}, iterations={}, conflicts={}, elapsed={:?}",
            n,
            restarts,
            total_iterations,
            best_conflicts,
            stats.elapsed
        );
        Ok((Some(best), stats))
    }
}

/// A single-queen relocation and the conflict count it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    row: usize,
    col: usize,
    conflicts: usize,
}

/// Finds the best strictly-improving single-queen move, if any.
///
/// Every queen is tried on every other column of its row. The board is
/// probed in place and restored before returning.
fn steepest_move(board: &mut [usize], current: usize) -> Option<Move> {
    let n = board.len();
    let mut best: Option<Move> = None;
    let mut best_conflicts = current;

    for row in 0..n {
        let original = board[row];
        for col in (0..n).filter(|&c| c != original) {
            board[row] = col;
            let conflicts = count_conflicts(board);
            if conflicts < best_conflicts {
                best_conflicts = conflicts;
                best = Some(Move {
                    row,
                    col,
                    conflicts,
                });
            }
        }
        board[row] = original;
    }
    best
}
