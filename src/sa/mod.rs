//! Simulated Annealing (SA).
//!
//! A single trajectory over permutations. Each step swaps two distinct
//! rows; improving swaps are always taken, others with probability
//! `exp(delta / T)`. Temperature starts at `10 * n`, cools geometrically
//! every step and is reheated at fixed checkpoints once it has fallen
//! below a threshold, so that a long run cannot freeze early.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::SaRunner;
