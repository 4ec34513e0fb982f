//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational loop:
//! selection → crossover → mutation → full replacement → check.
//! There is no elitism; parents never survive into the next generation.

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::GaConfig;
use super::operators::{mutate, reproduce};
use crate::board::Board;
use crate::error::{NQueensError, Result};
use crate::eval;
use crate::outcome::Verdict;
use crate::random::create_rng;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The first conflict-free board of the final population, or the
    /// population's first board when none is solved.
    pub board: Board,

    /// Score of `board`.
    pub score: usize,

    /// Whether `board` is conflict-free.
    pub verdict: Verdict,

    /// Number of generations produced.
    pub generations: usize,

    /// The final population.
    pub population: Vec<Board>,

    /// Best score in the initial population and in every generation.
    pub best_score_history: Vec<usize>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use nqueens_search::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_max_generations(1000).with_seed(42);
/// let result = GaRunner::run(6, &config).unwrap();
/// assert_eq!(result.population.len(), 4);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from a fresh random population of boards of size `n`.
    pub fn run(n: usize, config: &GaConfig) -> Result<GaResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let population = (0..config.population_size)
            .map(|_| Board::random(n, &mut rng))
            .collect::<Result<Vec<_>>>()?;
        Self::run_with_rng(population, config, &mut rng)
    }

    /// Runs the GA from `population`, drawing from the caller's `rng`.
    ///
    /// # Errors
    /// [`NQueensError::InvalidConfig`] if the population size differs from
    /// `config.population_size` or the boards differ in size.
    pub fn run_with_rng<R: Rng>(
        mut population: Vec<Board>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(NQueensError::InvalidConfig(format!(
                "expected a population of {}, got {}",
                config.population_size,
                population.len()
            )));
        }
        let n = population[0].len();
        if population.iter().any(|b| b.len() != n) {
            return Err(NQueensError::InvalidConfig(
                "all boards in a population must have the same size".into(),
            ));
        }

        let optimum = eval::max_score(n);
        let mut scores = evaluate_population(&population);
        let mut best_score_history = Vec::new();
        best_score_history.push(best_score(&scores));

        let mut generations = 0usize;
        let mut solved = scores.iter().position(|&s| s == optimum);

        while solved.is_none() && generations < config.max_generations {
            generations += 1;

            let mut next_gen = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let p1 = config.selection.select(&scores, rng);
                let p2 = config.selection.select(&scores, rng);

                let mut child = reproduce(&population[p1], &population[p2], rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    mutate(&mut child, rng);
                }
                next_gen.push(child);
            }

            population = next_gen;
            scores = evaluate_population(&population);
            let gen_best = best_score(&scores);
            best_score_history.push(gen_best);
            trace!(generation = generations, best_score = gen_best, "generation evaluated");

            solved = scores.iter().position(|&s| s == optimum);
        }

        let index = solved.unwrap_or(0);
        let board = population[index].clone();
        let score = scores[index];
        let verdict = Verdict::from_solved(solved.is_some());
        match verdict {
            Verdict::Solved => info!(generations, "genetic algorithm solved the board"),
            Verdict::GaveUp => debug!(
                generations,
                best_score = best_score(&scores),
                "genetic algorithm gave up"
            ),
        }

        Ok(GaResult {
            board,
            score,
            verdict,
            generations,
            population,
            best_score_history,
        })
    }
}

fn evaluate_population(population: &[Board]) -> Vec<usize> {
    population.iter().map(eval::evaluate).collect()
}

fn best_score(scores: &[usize]) -> usize {
    scores.iter().copied().max().unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
