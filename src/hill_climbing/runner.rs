//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. If the current board was explored before, randomize it (restart)
//! 2. Mark the current board explored
//! 3. Expand the neighborhood and pick the first highest-scoring
//!    unexplored candidate
//! 4. Move if it improves, or if it ties and a sideways move is allowed.
//!    On a plateau the neighborhood is only a restart board, so sideways
//!    moves fall back to the tied row shifts instead
//! 5. Stop at the optimum or after `max_iterations` steps

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::HillClimbingConfig;
use crate::board::Board;
use crate::error::Result;
use crate::eval;
use crate::neighbor::{self, Candidate};
use crate::outcome::Verdict;
use crate::random::create_rng;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbingResult {
    /// The final board.
    pub board: Board,

    /// Score of the final board.
    pub score: usize,

    /// Whether the final board is conflict-free.
    pub verdict: Verdict,

    /// Number of climbing steps taken.
    pub iterations: usize,

    /// Number of random restarts forced by revisiting a board.
    pub restarts: usize,

    /// Number of equal-score row shifts adopted.
    pub sideways_moves: usize,

    /// Number of distinct boards explored.
    pub explored: usize,

    /// Score of the current board at the start and after every step.
    pub score_history: Vec<usize>,
}

/// Executes hill climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing from a fresh random board of size `n`.
    pub fn run(n: usize, config: &HillClimbingConfig) -> Result<HillClimbingResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let board = Board::random(n, &mut rng)?;
        Self::run_with_rng(board, config, &mut rng)
    }

    /// Runs hill climbing from `board`, drawing from the caller's `rng`.
    pub fn run_with_rng<R: Rng>(
        mut board: Board,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<HillClimbingResult> {
        config.validate()?;

        let optimum = eval::max_score(board.len());
        let mut score = eval::evaluate(&board);
        let mut explored: HashSet<Board> = HashSet::new();
        let mut score_history = vec![score];

        let mut iterations = 0usize;
        let mut restarts = 0usize;
        let mut sideways_moves = 0usize;
        let mut sideways_run = 0usize;

        while score != optimum && iterations < config.max_iterations {
            iterations += 1;

            if explored.contains(&board) {
                board.randomize(rng);
                score = eval::evaluate(&board);
                restarts += 1;
                sideways_run = 0;
                debug!(iteration = iterations, score, "revisited board, random restart");
                if score == optimum {
                    score_history.push(score);
                    break;
                }
            }
            explored.insert(board.clone());

            let hood = neighbor::expand(&board, rng);
            let sideways_open = config.allow_sideways && sideways_run < config.max_sideways_moves;
            let tied_shift = if hood.restart && sideways_open {
                first_tied_unexplored(neighbor::shift_moves(&board), score, &explored)
            } else {
                None
            };

            if let Some(tied) = tied_shift {
                board = tied.board;
                sideways_run += 1;
                sideways_moves += 1;
            } else if let Some(best) = best_unexplored(&hood.candidates, &explored) {
                if best.score > score {
                    board = best.board.clone();
                    score = best.score;
                    sideways_run = 0;
                } else if !hood.restart && sideways_open && best.score == score {
                    board = best.board.clone();
                    sideways_run += 1;
                    sideways_moves += 1;
                }
            }

            score_history.push(score);
            trace!(
                iteration = iterations,
                score,
                conflicts = optimum - score,
                "hill climbing step"
            );
        }

        let verdict = Verdict::from_solved(score == optimum);
        match verdict {
            Verdict::Solved => info!(iterations, restarts, "hill climbing solved the board"),
            Verdict::GaveUp => debug!(iterations, restarts, score, "hill climbing gave up"),
        }

        Ok(HillClimbingResult {
            board,
            score,
            verdict,
            iterations,
            restarts,
            sideways_moves,
            explored: explored.len(),
            score_history,
        })
    }
}

/// First candidate with the highest score among those not yet explored.
fn best_unexplored<'a>(
    candidates: &'a [Candidate],
    explored: &HashSet<Board>,
) -> Option<&'a Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates.iter().filter(|c| !explored.contains(&c.board)) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// First row shift, in column order, that keeps `score` and leads to an
/// unexplored board.
fn first_tied_unexplored(
    shifts: Vec<Candidate>,
    score: usize,
    explored: &HashSet<Board>,
) -> Option<Candidate> {
    shifts
        .into_iter()
        .find(|c| c.score == score && !explored.contains(&c.board))
}
