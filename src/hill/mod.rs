//! Steepest-descent hill climbing with random restarts.
//!
//! Each restart begins from a random permutation and repeatedly commits
//! the single best strictly-improving move, where a move relocates the
//! queen of one row to another column. A restart ends at a solution, at a
//! local optimum, or when its iteration budget runs out.
//!
//! Ties between equally good moves go to the first one found when rows are
//! scanned in order and, within a row, columns in order.

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::HillRunner;
