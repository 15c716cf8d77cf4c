//! N-Queens search benchmark.
//!
//! Solves the N-Queens placement problem with four independent strategies
//! and reports comparable statistics (wall time, memory delta, work
//! counter, outcome) for each run:
//!
//! - **Exhaustive search** ([`dfs`]): depth-first backtracking with
//!   incremental occupancy sets and a sampled wall-clock timeout.
//! - **Hill climbing** ([`hill`]): steepest descent over single-queen moves
//!   with random restarts.
//! - **Simulated Annealing** ([`sa`]): swap moves, Metropolis acceptance,
//!   geometric cooling with periodic reheating.
//! - **Genetic Algorithm** ([`ga`]): elitism, tournament selection, PMX
//!   crossover and swap/invert mutation over permutations.
//!
//! The [`harness`] runs any subset of them over a list of board sizes and
//! aggregates the results. Every strategy is also reachable through the
//! [`Strategy`] trait, implemented by its config type.
//!
//! # Example
//!
//! ```
//! use u_nqueens::dfs::{DfsConfig, DfsRunner};
//! use u_nqueens::board::is_solution;
//!
//! let (solution, stats) = DfsRunner::run(10, &DfsConfig::default()).unwrap();
//! assert!(stats.success);
//! assert!(is_solution(&solution.unwrap()));
//! ```
//!
//! Absence of a solution is a normal outcome, reported through
//! [`SolveStats`]; only invalid input produces a [`QueensError`].

pub mod board;
pub mod dfs;
mod error;
pub mod ga;
pub mod harness;
pub mod hill;
pub mod instrument;
pub mod random;
pub mod sa;
mod stats;
mod strategy;

pub use error::{QueensError, Result};
pub use instrument::Instruments;
pub use stats::{Solve, SolveStats, StrategyKind, WorkUnit};
pub use strategy::Strategy;
