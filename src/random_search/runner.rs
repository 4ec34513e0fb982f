//! Random search execution loop.

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::RandomSearchConfig;
use crate::board::Board;
use crate::error::Result;
use crate::eval;
use crate::outcome::Verdict;
use crate::random::create_rng;

/// Result of a random search run.
#[derive(Debug, Clone)]
pub struct RandomSearchResult {
    /// The final board.
    pub board: Board,

    /// Score of the final board.
    pub score: usize,

    /// Whether the final board is conflict-free.
    pub verdict: Verdict,

    /// Number of full reassignments performed.
    pub iterations: usize,

    /// Score after the initial board and after every reassignment.
    pub score_history: Vec<usize>,
}

/// Executes random search.
pub struct RandomSearchRunner;

impl RandomSearchRunner {
    /// Runs random search from a fresh random board of size `n`.
    pub fn run(n: usize, config: &RandomSearchConfig) -> Result<RandomSearchResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let board = Board::random(n, &mut rng)?;
        Self::run_with_rng(board, config, &mut rng)
    }

    /// Runs random search from `board`, drawing from the caller's `rng`.
    pub fn run_with_rng<R: Rng>(
        mut board: Board,
        config: &RandomSearchConfig,
        rng: &mut R,
    ) -> Result<RandomSearchResult> {
        config.validate()?;

        let optimum = eval::max_score(board.len());
        let mut score = eval::evaluate(&board);
        let mut score_history = vec![score];
        let mut iterations = 0usize;

        while score != optimum && iterations < config.max_iterations {
            board.randomize(rng);
            score = eval::evaluate(&board);
            iterations += 1;
            score_history.push(score);
            trace!(
                iteration = iterations,
                score,
                conflicts = optimum - score,
                "random search step"
            );
        }

        let verdict = Verdict::from_solved(score == optimum);
        match verdict {
            Verdict::Solved => info!(iterations, "random search solved the board"),
            Verdict::GaveUp => debug!(iterations, score, "random search gave up"),
        }

        Ok(RandomSearchResult {
            board,
            score,
            verdict,
            iterations,
            score_history,
        })
    }
}
