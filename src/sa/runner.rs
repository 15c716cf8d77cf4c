//! SA execution loop.

use super::config::SaConfig;
use crate::board::count_conflicts;
use crate::error::{check_size, Result};
use crate::instrument::{Instruments, Meter};
use crate::random::{create_rng, distinct_pair, random_permutation};
use crate::stats::{Solve, SolveStats, StrategyKind};
use rand::Rng;

/// Executes the Simulated Annealing strategy.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with the system clock and memory probe.
    ///
    /// Returns a board only when it is conflict-free; the best imperfect
    /// board's conflict count is still reported in the statistics.
    pub fn run(n: usize, config: &SaConfig) -> Result<Solve> {
        Self::run_instrumented(n, config, &Instruments::system())
    }

    /// Runs SA using the given clock and memory probe.
    pub fn run_instrumented(
        n: usize,
        config: &SaConfig,
        instruments: &Instruments,
    ) -> Result<Solve> {
        check_size(n)?;
        config.validate()?;

        let meter = Meter::start(instruments);
        let mut rng = create_rng(config.seed);

        let max_iterations = config.max_iterations(n);
        let initial_temperature = config.initial_temperature(n);
        let checkpoint = config.checkpoint_interval(n);

        let mut current = random_permutation(n, &mut rng);
        let mut current_conflicts = count_conflicts(&current);
        let mut best = current.clone();
        let mut best_conflicts = current_conflicts;

        let mut temperature = initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut history = vec![best_conflicts];

        for iteration in 0..max_iterations {
            if current_conflicts == 0 {
                break;
            }
            iterations += 1;

            // Swapping two rows keeps the board a permutation.
            let (i, j) = distinct_pair(n, &mut rng);
            current.swap(i, j);
            let neighbor_conflicts = count_conflicts(&current);

            // Positive delta = improvement.
            let delta = current_conflicts as f64 - neighbor_conflicts as f64;
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else if temperature > config.min_temperature {
                rng.random_range(0.0..1.0) < (delta / temperature).exp()
            } else {
                false
            };

            if accept {
                current_conflicts = neighbor_conflicts;
                accepted_moves += 1;

                if current_conflicts < best_conflicts {
                    best.copy_from_slice(&current);
                    best_conflicts = current_conflicts;
                }
            } else {
                current.swap(i, j);
            }

            temperature =
                next_temperature(temperature, iteration, checkpoint, config, initial_temperature);

            if iteration.is_multiple_of(checkpoint) {
                history.push(best_conflicts);
                log::debug!(
                    "SA n={} checkpoint at iteration {}: temperature={:.4}, best_conflicts={}",
                    n,
                    iteration,
                    temperature,
                    best_conflicts
                );
            }
        }

        if history.last() != Some(&best_conflicts) {
            history.push(best_conflicts);
        }

        let success = best_conflicts == 0;
        let mut stats = SolveStats::new(StrategyKind::SimulatedAnnealing, n);
        stats.work = iterations;
        stats.final_conflicts = Some(best_conflicts);
        stats.success = success;
        stats.history = history;

        let (elapsed, memory_delta) = meter.finish();
        stats.elapsed = elapsed;
        stats.memory_delta = memory_delta;

        log::debug!(
            "SA n={}: iterations={}, accepted={}, improving={}, final_temperature={:.4}, conflicts={}, elapsed={:?}",
            n,
            iterations,
            accepted_moves,
            improving_moves,
            temperature,
            best_conflicts,
            stats.elapsed
        );
        Ok((success.then_some(best), stats))
    }
}

/// Temperature for the next iteration.
///
/// Cools geometrically, then at every checkpoint resets a temperature that
/// fell below `reheat_threshold` to `reheat_fraction * initial`.
fn next_temperature(
    temperature: f64,
    iteration: usize,
    checkpoint: usize,
    config: &SaConfig,
    initial: f64,
) -> f64 {
    let cooled = temperature * config.cooling_rate;
    if iteration.is_multiple_of(checkpoint) && cooled < config.reheat_threshold {
        initial * config.reheat_fraction
    } else {
        cooled
    }
}
