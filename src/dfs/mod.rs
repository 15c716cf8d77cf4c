//! Exhaustive depth-first search (backtracking).
//!
//! Places one queen per row in increasing row order, trying columns in
//! increasing order, and keeps three occupancy sets (columns, `row - col`
//! diagonals, `row + col` diagonals) in lock-step with the active path.
//! Returns the first complete placement found.
//!
//! The search is exponential in the worst case; the wall-clock timeout is
//! the only bound. The clock is sampled every `check_interval` nodes, so a
//! run may overshoot its timeout by up to that many nodes.

mod config;
mod runner;

pub use config::DfsConfig;
pub use runner::DfsRunner;
