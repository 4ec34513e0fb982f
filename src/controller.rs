//! Run controller.
//!
//! Validates a [`RunConfig`], builds the initial board from a single seeded
//! RNG, hands it to the selected strategy and reports a uniform
//! [`RunOutcome`]. All configuration errors are returned before any search
//! work starts.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::board::Board;
use crate::error::{NQueensError, Result};
use crate::eval;
use crate::ga::{GaConfig, GaRunner};
use crate::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
use crate::limits::{validate_limit, validate_size};
use crate::outcome::Verdict;
use crate::random::create_rng;
use crate::random_search::{RandomSearchConfig, RandomSearchRunner};
use crate::sa::{SaConfig, SaRunner};

/// The four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyKind {
    RandomSearch,
    HillClimbing,
    SimulatedAnnealing,
    GeneticAlgorithm,
}

impl StrategyKind {
    /// All strategies in menu order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::RandomSearch,
        StrategyKind::HillClimbing,
        StrategyKind::SimulatedAnnealing,
        StrategyKind::GeneticAlgorithm,
    ];

    /// Maps menu numbers `1..=4` to strategies.
    pub fn from_selector(selector: u32) -> Result<Self> {
        match selector {
            1 => Ok(StrategyKind::RandomSearch),
            2 => Ok(StrategyKind::HillClimbing),
            3 => Ok(StrategyKind::SimulatedAnnealing),
            4 => Ok(StrategyKind::GeneticAlgorithm),
            other => Err(NQueensError::InvalidStrategySelector(other.to_string())),
        }
    }

    /// Menu number of this strategy.
    pub fn selector(self) -> u32 {
        match self {
            StrategyKind::RandomSearch => 1,
            StrategyKind::HillClimbing => 2,
            StrategyKind::SimulatedAnnealing => 3,
            StrategyKind::GeneticAlgorithm => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::RandomSearch => "random",
            StrategyKind::HillClimbing => "hill-climbing",
            StrategyKind::SimulatedAnnealing => "simulated-annealing",
            StrategyKind::GeneticAlgorithm => "genetic",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a menu number (`"1"`–`"4"`) or a strategy name.
impl FromStr for StrategyKind {
    type Err = NQueensError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(selector) = key.parse::<u32>() {
            return Self::from_selector(selector);
        }
        match key.as_str() {
            "random" | "random-search" => Ok(StrategyKind::RandomSearch),
            "hill" | "hill-climbing" => Ok(StrategyKind::HillClimbing),
            "sa" | "annealing" | "simulated-annealing" => Ok(StrategyKind::SimulatedAnnealing),
            "ga" | "genetic" | "genetic-algorithm" => Ok(StrategyKind::GeneticAlgorithm),
            _ => Err(NQueensError::InvalidStrategySelector(s.to_string())),
        }
    }
}

/// Configuration for one controlled run.
///
/// `iteration_limit`, when set, replaces the primary cap of the selected
/// strategy: reassignments, climbing steps, annealing rounds or
/// generations. `seed` drives both the initial board and the search; the
/// `seed` fields of the per-strategy configs are not used here.
///
/// # Examples
///
/// ```
/// use nqueens_search::{RunConfig, RunController, StrategyKind};
///
/// let config = RunConfig::new(6, StrategyKind::HillClimbing)
///     .with_iteration_limit(5000)
///     .with_seed(42);
/// let outcome = RunController::run(&config).unwrap();
/// assert_eq!(outcome.board.len(), 6);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Number of queens, `1..=MAX_QUEENS`.
    pub board_size: usize,

    /// Strategy to run.
    pub strategy: StrategyKind,

    /// Cap override, `1..MAX_ITERATION_LIMIT`.
    pub iteration_limit: Option<usize>,

    /// Seed for the shared RNG. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Used when `strategy` is `RandomSearch`.
    pub random_search: RandomSearchConfig,

    /// Used when `strategy` is `HillClimbing`.
    pub hill_climbing: HillClimbingConfig,

    /// Used when `strategy` is `SimulatedAnnealing`.
    pub annealing: SaConfig,

    /// Used when `strategy` is `GeneticAlgorithm`.
    pub genetic: GaConfig,
}

impl RunConfig {
    /// Reference defaults for every strategy.
    pub fn new(board_size: usize, strategy: StrategyKind) -> Self {
        Self {
            board_size,
            strategy,
            iteration_limit: None,
            seed: None,
            random_search: RandomSearchConfig::default(),
            hill_climbing: HillClimbingConfig::default(),
            annealing: SaConfig::default(),
            genetic: GaConfig::default(),
        }
    }

    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hill_climbing(mut self, config: HillClimbingConfig) -> Self {
        self.hill_climbing = config;
        self
    }

    pub fn with_annealing(mut self, config: SaConfig) -> Self {
        self.annealing = config;
        self
    }

    pub fn with_genetic(mut self, config: GaConfig) -> Self {
        self.genetic = config;
        self
    }

    pub fn with_random_search(mut self, config: RandomSearchConfig) -> Self {
        self.random_search = config;
        self
    }

    fn random_search_config(&self) -> RandomSearchConfig {
        let mut config = self.random_search.clone();
        if let Some(limit) = self.iteration_limit {
            config.max_iterations = limit;
        }
        config
    }

    fn hill_climbing_config(&self) -> HillClimbingConfig {
        let mut config = self.hill_climbing.clone();
        if let Some(limit) = self.iteration_limit {
            config.max_iterations = limit;
        }
        config
    }

    fn annealing_config(&self) -> SaConfig {
        let mut config = self.annealing.clone();
        if let Some(limit) = self.iteration_limit {
            config.max_rounds = limit;
        }
        config
    }

    fn genetic_config(&self) -> GaConfig {
        let mut config = self.genetic.clone();
        if let Some(limit) = self.iteration_limit {
            config.max_generations = limit;
        }
        config
    }

    /// Validates the board size, the limit override and the selected
    /// strategy's configuration.
    pub fn validate(&self) -> Result<()> {
        validate_size(self.board_size)?;
        if let Some(limit) = self.iteration_limit {
            validate_limit(limit)?;
        }
        match self.strategy {
            StrategyKind::RandomSearch => self.random_search_config().validate(),
            StrategyKind::HillClimbing => self.hill_climbing_config().validate(),
            StrategyKind::SimulatedAnnealing => self.annealing_config().validate(),
            StrategyKind::GeneticAlgorithm => self.genetic_config().validate(),
        }
    }
}

/// Strategy-independent view of a finished run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    /// Strategy that produced the outcome.
    pub strategy: StrategyKind,

    /// The board the search started from (the first individual for GA).
    pub initial: Board,

    /// Final (or best, for annealing) board.
    pub board: Board,

    /// Final population, genetic algorithm only.
    pub population: Option<Vec<Board>>,

    /// Score of `board`.
    pub score: usize,

    /// Score of a conflict-free board of this size.
    pub optimum: usize,

    /// Whether `board` is conflict-free.
    pub verdict: Verdict,

    /// Steps, total annealing evaluations or generations, depending on the
    /// strategy.
    pub iterations: usize,
}

impl RunOutcome {
    pub fn is_solved(&self) -> bool {
        self.verdict.is_solved()
    }

    /// Number of attacking queen pairs left on `board`.
    pub fn conflicts(&self) -> usize {
        self.optimum - self.score
    }
}

/// Dispatches a [`RunConfig`] to its strategy.
pub struct RunController;

impl RunController {
    /// Validates `config`, then runs the selected strategy.
    pub fn run(config: &RunConfig) -> Result<RunOutcome> {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let initial = Board::random(config.board_size, &mut rng)?;
        let optimum = eval::max_score(config.board_size);
        info!(
            strategy = %config.strategy,
            size = config.board_size,
            score = eval::evaluate(&initial),
            "starting search"
        );

        let outcome = match config.strategy {
            StrategyKind::RandomSearch => {
                let result = RandomSearchRunner::run_with_rng(
                    initial.clone(),
                    &config.random_search_config(),
                    &mut rng,
                )?;
                RunOutcome {
                    strategy: config.strategy,
                    initial,
                    board: result.board,
                    population: None,
                    score: result.score,
                    optimum,
                    verdict: result.verdict,
                    iterations: result.iterations,
                }
            }
            StrategyKind::HillClimbing => {
                let result = HillClimbingRunner::run_with_rng(
                    initial.clone(),
                    &config.hill_climbing_config(),
                    &mut rng,
                )?;
                RunOutcome {
                    strategy: config.strategy,
                    initial,
                    board: result.board,
                    population: None,
                    score: result.score,
                    optimum,
                    verdict: result.verdict,
                    iterations: result.iterations,
                }
            }
            StrategyKind::SimulatedAnnealing => {
                let result =
                    SaRunner::run_with_rng(initial.clone(), &config.annealing_config(), &mut rng)?;
                RunOutcome {
                    strategy: config.strategy,
                    initial,
                    board: result.best,
                    population: None,
                    score: result.best_score,
                    optimum,
                    verdict: result.verdict,
                    iterations: result.iterations,
                }
            }
            StrategyKind::GeneticAlgorithm => {
                let ga_config = config.genetic_config();
                let mut population = Vec::with_capacity(ga_config.population_size);
                population.push(initial.clone());
                for _ in 1..ga_config.population_size {
                    population.push(Board::random(config.board_size, &mut rng)?);
                }
                let result = GaRunner::run_with_rng(population, &ga_config, &mut rng)?;
                RunOutcome {
                    strategy: config.strategy,
                    initial,
                    board: result.board,
                    population: Some(result.population),
                    score: result.score,
                    optimum,
                    verdict: result.verdict,
                    iterations: result.generations,
                }
            }
        };

        info!(
            strategy = %outcome.strategy,
            verdict = %outcome.verdict,
            score = outcome.score,
            iterations = outcome.iterations,
            "search finished"
        );
        Ok(outcome)
    }
}
