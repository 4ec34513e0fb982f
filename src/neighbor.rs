//! Neighbor generation.
//!
//! Every queen that is under attack proposes one row shift: one row up if
//! that stays on the board, otherwise one row down. Each shift is applied to
//! its own copy of the board. When none of the shifts improves the score
//! (including the case where no queen is attacked) the neighborhood is a
//! single random restart, so callers always receive at least one candidate.

use rand::Rng;

use crate::board::Board;
use crate::eval;

/// A neighbor board with its cached score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The neighbor board.
    pub board: Board,
    /// `eval::evaluate(&board)`.
    pub score: usize,
}

impl Candidate {
    /// Scores `board` and wraps it.
    pub fn new(board: Board) -> Self {
        let score = eval::evaluate(&board);
        Self { board, score }
    }
}

/// Candidates one step away from a board. Never empty.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    /// Candidate boards in column order (or the single restart board).
    pub candidates: Vec<Candidate>,
    /// `true` when the candidates are a random-restart fallback.
    pub restart: bool,
}

/// Row-shift target for a queen in `row` on a board of size `n`.
fn shifted_row(row: usize, n: usize) -> Option<usize> {
    if row + 1 < n {
        Some(row + 1)
    } else if row > 0 {
        Some(row - 1)
    } else {
        None
    }
}

/// The row-shift moves for every attacked queen of `board`, without the
/// restart fallback.
pub fn shift_moves(board: &Board) -> Vec<Candidate> {
    let n = board.len();
    eval::conflicted_columns(board)
        .into_iter()
        .filter_map(|column| {
            shifted_row(board.row(column), n).map(|row| Candidate::new(board.with_row(column, row)))
        })
        .collect()
}

/// Generates the neighborhood of `board`.
///
/// `board` itself is never modified.
pub fn expand<R: Rng>(board: &Board, rng: &mut R) -> Neighborhood {
    let score = eval::evaluate(board);
    let candidates = shift_moves(board);

    if candidates.iter().any(|c| c.score > score) {
        return Neighborhood {
            candidates,
            restart: false,
        };
    }

    let mut restart = board.clone();
    restart.randomize(rng);
    Neighborhood {
        candidates: vec![Candidate::new(restart)],
        restart: true,
    }
}
