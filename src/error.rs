//! Error types for u-nqueens.

use thiserror::Error;

/// Result type alias for u-nqueens operations.
pub type Result<T> = std::result::Result<T, QueensError>;

/// Errors raised before any search work begins.
///
/// A search that ends without a solution (exhausted, stagnated or timed
/// out) is not an error; it is reported through [`SolveStats`](crate::SolveStats).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// The board size cannot host a permutation universe.
    #[error("invalid board size: n = {n}, must be at least 1")]
    InvalidSize {
        /// The rejected board size.
        n: usize,
    },

    /// A strategy configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Rejects board sizes that no strategy can work with.
pub(crate) fn check_size(n: usize) -> Result<()> {
    if n == 0 {
        return Err(QueensError::InvalidSize { n });
    }
    Ok(())
}
