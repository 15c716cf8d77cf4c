//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! evaluation → ranking → elitism → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{mutate, pmx_crossover};
use super::selection::tournament;
use super::types::Individual;
use crate::board::max_conflicts;
use crate::error::{check_size, Result};
use crate::instrument::{Instruments, Meter};
use crate::random::{create_rng, random_permutation};
use crate::stats::{Solve, SolveStats, StrategyKind};
use rand::Rng;

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_nqueens::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let (solution, stats) = GaRunner::run(5, &config).unwrap();
/// assert_eq!(solution.is_some(), stats.success);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the system clock and memory probe.
    pub fn run(n: usize, config: &GaConfig) -> Result<Solve> {
        Self::run_instrumented(n, config, &Instruments::system())
    }

    /// Runs the GA using the given clock and memory probe.
    ///
    /// Terminates on the first generation whose best individual is a
    /// solution, after more than `max_generations / 10` generations without
    /// improvement, or at the generation cap.
    pub fn run_instrumented(
        n: usize,
        config: &GaConfig,
        instruments: &Instruments,
    ) -> Result<Solve> {
        check_size(n)?;
        config.validate()?;

        let population_size = config.population_size(n);
        let max_generations = config.max_generations(n);
        let elite_count = config.elite_count(population_size);
        let stagnation_limit = config.stagnation_limit(n);
        let max_fitness = max_conflicts(n);

        let meter = Meter::start(instruments);
        let mut rng = create_rng(config.seed);

        // 1. Initialize population
        let mut population: Vec<Individual> = (0..population_size)
            .map(|_| Individual::new(random_permutation(n, &mut rng)))
            .collect();

        let mut best: Option<Individual> = None;
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut generations = 0usize;
        let mut fitness_history = Vec::with_capacity(max_generations);

        // 2. Evolutionary loop
        for generation in 0..max_generations {
            generations = generation + 1;

            // Rank by fitness, best first (stable for equal fitness)
            population.sort_by(|a, b| b.fitness.cmp(&a.fitness));
            let leader = &population[0];
            log::trace!(
                "GA n={} generation {}: best_fitness={}/{}",
                n,
                generations,
                leader.fitness,
                max_fitness
            );

            if leader.fitness == max_fitness {
                best = Some(leader.clone());
                fitness_history.push(0);
                break;
            }

            if best.as_ref().is_none_or(|b| leader.fitness > b.fitness) {
                best = Some(leader.clone());
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.as_ref().map_or(max_fitness, Individual::conflicts));

            if stagnation_counter > stagnation_limit {
                stagnated = true;
                log::debug!(
                    "GA n={} stagnated after {} generations without improvement",
                    n,
                    stagnation_counter
                );
                break;
            }

            // 3. Elitism + offspring
            population = next_generation(&population, elite_count, config, &mut rng);
        }

        let best_fitness = best.as_ref().map_or(0, |b| b.fitness);
        let success = best_fitness == max_fitness;

        let mut stats = SolveStats::new(StrategyKind::Genetic, n);
        stats.work = generations;
        stats.best_fitness = Some(best_fitness);
        stats.final_conflicts = Some(max_fitness - best_fitness);
        stats.success = success;
        stats.stagnated = stagnated;
        stats.history = fitness_history;

        let (elapsed, memory_delta) = meter.finish();
        stats.elapsed = elapsed;
        stats.memory_delta = memory_delta;

        log::debug!(
            "GA n={}: generations={}, best_fitness={}/{}, stagnated={}, elapsed={:?}",
            n,
            generations,
            best_fitness,
            max_fitness,
            stagnated,
            stats.elapsed
        );

        let solution = best.filter(|_| success).map(|b| b.genes);
        Ok((solution, stats))
    }
}

/// Builds the next generation from a population ranked best first.
///
/// The first `elite_count` individuals are carried over untouched; the rest
/// are bred from tournament-selected parents. The result has the same size
/// as `ranked`.
fn next_generation<R: Rng>(
    ranked: &[Individual],
    elite_count: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let population_size = ranked.len();
    let mut next_gen: Vec<Individual> = ranked[..elite_count].to_vec();

    while next_gen.len() < population_size {
        let p1 = &ranked[tournament(ranked, config.tournament_size, rng)];
        let p2 = &ranked[tournament(ranked, config.tournament_size, rng)];

        let (c1, c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
            pmx_crossover(&p1.genes, &p2.genes, rng)
        } else {
            (p1.genes.clone(), p2.genes.clone())
        };

        for mut child in [c1, c2] {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                mutate(&mut child, rng);
            }
            next_gen.push(Individual::new(child));
        }
    }
    next_gen.truncate(population_size);
    next_gen
}
