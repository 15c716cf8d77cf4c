//! Conflict model shared by every strategy.
//!
//! A board is a slice where index = row and value = column of the queen on
//! that row (0-indexed). Stochastic strategies always work on complete
//! permutations of `0..n`; the exhaustive search builds boards row by row
//! and marks unplaced rows with [`UNPLACED`].
//!
//! Row collisions are impossible by construction. A pair of queens is in
//! conflict when they share a column, a `row - col` diagonal or a
//! `row + col` anti-diagonal.

/// Sentinel value for a row that has no queen yet.
pub const UNPLACED: usize = usize::MAX;

/// Returns whether a queen can go at `(row, col)` given the queens already
/// placed on rows `0..row`.
///
/// Only `board[..row]` is inspected, so the tail may hold [`UNPLACED`].
///
/// # Complexity
/// O(row)
pub fn is_safe(board: &[usize], row: usize, col: usize) -> bool {
    board[..row].iter().enumerate().all(|(i, &c)| {
        // Compare diagonals in signed space: c - i == col - row  <=>  c + row == col + i
        c != col && c + row != col + i && c + i != col + row
    })
}

/// Counts attacking pairs on a complete board.
///
/// Keeps a running tally per column, per `row - col` diagonal and per
/// `row + col` diagonal; every queen adds the number of queens already seen
/// on each of its three lines. A line holding `k` queens therefore
/// contributes `k * (k - 1) / 2`. The input is never mutated.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn count_conflicts(board: &[usize]) -> usize {
    let n = board.len();
    // Hill climbing probes boards with repeated columns, so size the
    // column tally by the widest value rather than assuming a permutation.
    let width = board.iter().copied().max().map_or(n, |m| n.max(m + 1));
    let mut columns = vec![0usize; width];
    let mut diag = vec![0usize; n + width];
    let mut anti = vec![0usize; n + width];

    let mut conflicts = 0;
    for (row, &col) in board.iter().enumerate() {
        conflicts += columns[col];
        columns[col] += 1;

        // row - col, shifted to stay non-negative
        let d = row + width - col;
        conflicts += diag[d];
        diag[d] += 1;

        let a = row + col;
        conflicts += anti[a];
        anti[a] += 1;
    }
    conflicts
}

/// Upper bound of [`count_conflicts`] on a permutation: `n * (n - 1) / 2`.
pub fn max_conflicts(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Checks that `board` is a permutation of `0..board.len()`.
pub fn is_valid_permutation(board: &[usize]) -> bool {
    let n = board.len();
    let mut seen = vec![false; n];
    for &v in board {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Returns whether `board` is a complete, conflict-free placement.
pub fn is_solution(board: &[usize]) -> bool {
    is_valid_permutation(board) && count_conflicts(board) == 0
}
