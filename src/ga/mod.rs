//! Genetic Algorithm over permutation boards.
//!
//! Each generation ranks the population by fitness, keeps the top 20%
//! unchanged, and fills the rest with children of tournament-selected
//! parents: PMX crossover with probability 0.8 (else the parents are
//! cloned), then a swap or segment-reversal mutation with probability 0.1.
//! Every operator preserves permutations, so row and column conflicts
//! never arise and only diagonals are searched.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, generation cap)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`Individual`]: A board with its cached fitness
//!
//! # Submodules
//!
//! - [`operators`]: PMX crossover, swap and invert mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::GaRunner;
pub use selection::tournament;
pub use types::{fitness, Individual};
