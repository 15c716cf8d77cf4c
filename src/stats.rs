//! Per-invocation statistics record.

use std::fmt;
use std::time::Duration;

/// Which of the four search strategies produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    /// Depth-first backtracking with timeout.
    Exhaustive,
    /// Steepest-descent hill climbing with random restarts.
    HillClimbing,
    /// Simulated annealing with reheating.
    SimulatedAnnealing,
    /// Permutation genetic algorithm.
    Genetic,
}

impl StrategyKind {
    /// All strategies, in benchmark order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Exhaustive,
        StrategyKind::HillClimbing,
        StrategyKind::SimulatedAnnealing,
        StrategyKind::Genetic,
    ];

    /// Unit of this strategy's work counter.
    pub fn work_unit(self) -> WorkUnit {
        match self {
            StrategyKind::Exhaustive => WorkUnit::Nodes,
            StrategyKind::HillClimbing | StrategyKind::SimulatedAnnealing => WorkUnit::Iterations,
            StrategyKind::Genetic => WorkUnit::Generations,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Exhaustive => "DFS",
            StrategyKind::HillClimbing => "Hill Climbing",
            StrategyKind::SimulatedAnnealing => "Simulated Annealing",
            StrategyKind::Genetic => "Genetic Algorithm",
        };
        f.write_str(name)
    }
}

/// What [`SolveStats::work`] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkUnit {
    /// Recursive calls of the exhaustive search.
    Nodes,
    /// Move evaluations (annealing) or committed descent steps (hill climbing).
    Iterations,
    /// Genetic algorithm generations.
    Generations,
}

/// Statistics for one strategy invocation.
///
/// Created when the invocation starts and handed to the caller on return.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    pub strategy: StrategyKind,

    /// Board size.
    pub n: usize,

    /// Wall-clock time of the invocation.
    pub elapsed: Duration,

    /// Resident memory after minus before, in bytes. 0 when unmeasurable.
    pub memory_delta: i64,

    /// Strategy-specific work counter, see [`WorkUnit`].
    pub work: usize,

    /// Random restarts started (hill climbing only).
    pub restarts: usize,

    /// Complete solutions found (exhaustive search only, 0 or 1).
    pub solutions_found: usize,

    /// Lowest conflict count reached. `None` for the exhaustive search.
    pub final_conflicts: Option<usize>,

    /// Best fitness reached (genetic algorithm only).
    pub best_fitness: Option<usize>,

    /// Whether a conflict-free board was returned.
    pub success: bool,

    /// Whether the exhaustive search hit its timeout.
    pub timed_out: bool,

    /// Whether the genetic algorithm stopped on stagnation.
    pub stagnated: bool,

    /// Best conflict count so far, sampled per restart (hill climbing),
    /// per reheating checkpoint (annealing) or per generation (genetic).
    pub history: Vec<usize>,
}

impl SolveStats {
    /// An empty record for `strategy` on an `n`-queens board.
    pub fn new(strategy: StrategyKind, n: usize) -> Self {
        Self {
            strategy,
            n,
            elapsed: Duration::ZERO,
            memory_delta: 0,
            work: 0,
            restarts: 0,
            solutions_found: 0,
            final_conflicts: None,
            best_fitness: None,
            success: false,
            timed_out: false,
            stagnated: false,
            history: Vec::new(),
        }
    }

    pub fn work_unit(&self) -> WorkUnit {
        self.strategy.work_unit()
    }
}

/// Outcome of one strategy invocation: the solution, if any, and its record.
pub type Solve = (Option<Vec<usize>>, SolveStats);
