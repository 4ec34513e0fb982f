//! SA execution loop.

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::SaConfig;
use crate::board::Board;
use crate::error::Result;
use crate::eval;
use crate::neighbor;
use crate::outcome::Verdict;
use crate::random::create_rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best board found.
    pub best: Board,

    /// Score of the best board.
    pub best_score: usize,

    /// Whether the best board is conflict-free.
    pub verdict: Verdict,

    /// Number of annealing rounds started.
    pub rounds: usize,

    /// Total number of candidate evaluations across all rounds.
    pub iterations: usize,

    /// Temperature of the last evaluated step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best score at the start and at the end of every round.
    pub score_history: Vec<usize>,
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a fresh random board of size `n`.
    pub fn run(n: usize, config: &SaConfig) -> Result<SaResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let board = Board::random(n, &mut rng)?;
        Self::run_with_rng(board, config, &mut rng)
    }

    /// Runs SA from `board`, drawing from the caller's `rng`.
    pub fn run_with_rng<R: Rng>(board: Board, config: &SaConfig, rng: &mut R) -> Result<SaResult> {
        config.validate()?;

        let optimum = eval::max_score(board.len());
        let mut current_score = eval::evaluate(&board);
        let mut current = board;
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut rounds = 0usize;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut final_temperature = config.schedule.temperature(0);
        let mut score_history = vec![best_score];

        while best_score != optimum && rounds < config.max_rounds {
            rounds += 1;

            for t in 0.. {
                let temperature = config.schedule.temperature(t);
                if temperature <= 0.0 {
                    break;
                }
                final_temperature = temperature;

                let mut hood = neighbor::expand(&current, rng);
                let pick = rng.random_range(0..hood.candidates.len());
                let candidate = hood.candidates.swap_remove(pick);
                let delta = candidate.score as i64 - current_score as i64;
                iterations += 1;

                let accept = if delta > 0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
                };

                if accept {
                    current = candidate.board;
                    current_score = candidate.score;
                    accepted_moves += 1;

                    if current_score > best_score {
                        best = current.clone();
                        best_score = current_score;
                    }
                }

                trace!(round = rounds, step = t, temperature, score = current_score, "annealing step");

                // Stop at the optimum so a later downhill move cannot leave it.
                if current_score == optimum {
                    break;
                }
            }

            score_history.push(best_score);
            debug!(round = rounds, best_score, score = current_score, "annealing round finished");
        }

        let verdict = Verdict::from_solved(best_score == optimum);
        match verdict {
            Verdict::Solved => info!(rounds, iterations, "simulated annealing solved the board"),
            Verdict::GaveUp => debug!(rounds, best_score, "simulated annealing gave up"),
        }

        Ok(SaResult {
            best,
            best_score,
            verdict,
            rounds,
            iterations,
            final_temperature,
            accepted_moves,
            improving_moves,
            score_history,
        })
    }
}

/// Probability of accepting a move with score change `delta` at
/// `temperature`: `exp(delta / T)` clamped to `[0, 1]`.
///
/// Improving moves (`delta > 0`) always return 1. A non-positive
/// temperature rejects every non-improving move.
pub fn acceptance_probability(delta: i64, temperature: f64) -> f64 {
    if delta > 0 {
        1.0
    } else if temperature > 0.0 {
        (delta as f64 / temperature).exp().clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NQueensError;
    use crate::sa::Schedule;

    #[test]
    fn test_acceptance_probability_bounds() {
        assert_eq!(acceptance_probability(3, 1.0), 1.0);
        assert_eq!(acceptance_probability(0, 5.0), 1.0);
        assert_eq!(acceptance_probability(-1, 0.0), 0.0);
        for delta in -50..=0 {
            for &t in &[0.01, 0.5, 1.0, 20.0, 1e6] {
                let p = acceptance_probability(delta, t);
                assert!((0.0..=1.0).contains(&p), "p = {p} for delta {delta}, T {t}");
            }
        }
    }

    #[test]
    fn test_acceptance_probability_monotone() {
        // Hotter is more permissive; smaller losses are more permissive.
        assert!(acceptance_probability(-2, 10.0) > acceptance_probability(-2, 1.0));
        assert!(acceptance_probability(-1, 5.0) > acceptance_probability(-4, 5.0));
        assert!((acceptance_probability(-2, 2.0) - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_single_queen_terminates_immediately() {
        let result = SaRunner::run(1, &SaConfig::default().with_seed(1)).unwrap();
        assert_eq!(result.verdict, Verdict::Solved);
        assert_eq!(result.rounds, 0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_solves_small_boards() {
        for n in [4, 5, 6] {
            let config = SaConfig::default().with_seed(42);
            let result = SaRunner::run(n, &config).unwrap();
            assert_eq!(result.verdict, Verdict::Solved, "n = {n}");
            assert!(eval::is_solved(&result.best));
            assert_eq!(result.best_score, eval::max_score(n));
        }
    }

    #[test]
    fn test_round_cap_and_inner_horizon() {
        let config = SaConfig::default()
            .with_schedule(Schedule::new(20.0, 0.005, 10))
            .with_max_rounds(3)
            .with_seed(5);
        let result = SaRunner::run(30, &config).unwrap();
        assert!(result.rounds <= 3);
        assert!(result.iterations <= 30);
        assert!(result.accepted_moves <= result.iterations);
        assert!(result.improving_moves <= result.accepted_moves);
    }

    #[test]
    fn test_best_history_non_decreasing() {
        let config = SaConfig::default().with_max_rounds(20).with_seed(3);
        let result = SaRunner::run(12, &config).unwrap();
        for window in result.score_history.windows(2) {
            assert!(window[1] >= window[0], "{} < {}", window[1], window[0]);
        }
        assert_eq!(result.score_history.len(), result.rounds + 1);
        assert_eq!(result.best_score, eval::evaluate(&result.best));
    }

    #[test]
    fn test_invalid_schedule_rejected() {
        let config = SaConfig::default().with_schedule(Schedule::new(-1.0, 0.005, 100));
        assert!(matches!(
            SaRunner::run(8, &config),
            Err(NQueensError::InvalidConfig(_))
        ));
    }
}
