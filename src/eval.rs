//! Conflict detection and board evaluation.
//!
//! All strategies compare boards with [`evaluate`]: the number of
//! non-attacking queen pairs, `C(N, 2) - conflicts`. Higher is better and
//! [`max_score`] means solved.

use crate::board::Board;

/// Returns `true` if queens at `(col_a, row_a)` and `(col_b, row_b)` attack
/// each other: same column, same row, or same diagonal.
///
/// Symmetric in its two positions.
#[inline]
pub fn in_conflict(col_a: usize, row_a: usize, col_b: usize, row_b: usize) -> bool {
    col_a == col_b || row_a == row_b || col_a.abs_diff(col_b) == row_a.abs_diff(row_b)
}

/// Returns `true` if a queen placed at `(column, row)` would be attacked by
/// the queen of any other column of `board`.
///
/// The queen currently standing in `column` is ignored, so `row` may be a
/// hypothetical position for that column.
pub fn queen_in_conflict(row: usize, column: usize, board: &Board) -> bool {
    board
        .rows()
        .iter()
        .enumerate()
        .any(|(other_col, &other_row)| {
            other_col != column && in_conflict(column, row, other_col, other_row)
        })
}

/// Number of unordered column pairs whose queens attack each other.
///
/// O(N²) pairwise scan.
pub fn count_conflicts(board: &Board) -> usize {
    let rows = board.rows();
    let mut count = 0;
    for a in 0..rows.len() {
        for b in (a + 1)..rows.len() {
            if in_conflict(a, rows[a], b, rows[b]) {
                count += 1;
            }
        }
    }
    count
}

/// Number of queen pairs on a board of size `n`: `n * (n - 1) / 2`.
#[inline]
pub fn max_score(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Fitness score: `max_score(N) - count_conflicts(board)`.
pub fn evaluate(board: &Board) -> usize {
    max_score(board.len()) - count_conflicts(board)
}

/// Returns `true` if no two queens attack each other.
pub fn is_solved(board: &Board) -> bool {
    evaluate(board) == max_score(board.len())
}

/// Columns whose queen is attacked by at least one other queen, ascending.
pub fn conflicted_columns(board: &Board) -> Vec<usize> {
    board
        .rows()
        .iter()
        .enumerate()
        .filter(|&(column, &row)| queen_in_conflict(row, column, board))
        .map(|(column, _)| column)
        .collect()
}
