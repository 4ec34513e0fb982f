//! Local-search sandbox for the N-Queens problem.
//!
//! A board of size `N` places one queen per column; the row of each queen
//! is the only decision. Boards are scored by the number of non-attacking
//! queen pairs, so `N·(N−1)/2` means solved. Four strategies search over
//! the same representation:
//!
//! - **Random search**: reassign every queen until solved or out of budget.
//! - **Hill climbing**: greedy single-queen shifts with an explored-board
//!   set and random restarts.
//! - **Simulated annealing (SA)**: random neighbors accepted with the
//!   Metropolis probability under an exponential cooling schedule.
//! - **Genetic algorithm (GA)**: a small population evolved with
//!   single-point crossover and single-gene mutation.
//!
//! [`RunController`] validates a [`RunConfig`], builds the initial board and
//! dispatches to the chosen strategy, reporting a [`RunOutcome`].
//!
//! # Example
//!
//! ```
//! use nqueens_search::{eval, RunConfig, RunController, StrategyKind};
//!
//! let config = RunConfig::new(8, StrategyKind::SimulatedAnnealing).with_seed(7);
//! let outcome = RunController::run(&config).unwrap();
//! assert_eq!(outcome.score, eval::evaluate(&outcome.board));
//! println!("{}", outcome.board);
//! ```

pub mod board;
pub mod controller;
pub mod error;
pub mod eval;
pub mod ga;
pub mod hill_climbing;
mod limits;
pub mod neighbor;
mod outcome;
pub mod random;
pub mod random_search;
pub mod sa;

pub use board::Board;
pub use controller::{RunConfig, RunController, RunOutcome, StrategyKind};
pub use error::{NQueensError, Result};
pub use limits::{validate_limit, validate_size, DEFAULT_LIMIT, MAX_ITERATION_LIMIT, MAX_QUEENS};
pub use outcome::Verdict;
