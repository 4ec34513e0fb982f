//! Hill climbing with neighbor expansion.
//!
//! Each step expands the current board, takes the best neighbor that has
//! not been explored yet, and moves there only if it scores strictly
//! higher (or equal, when sideways moves are enabled and the sideways
//! budget allows it). Returning to an already explored board triggers a
//! random restart, which is the only way out of a local maximum.
//!
//! Without sideways moves the climber stalls on plateaus and leans on
//! restarts. With [`HillClimbingConfig::with_sideways_moves`] the climber
//! walks a plateau through tied row shifts, up to a bounded number of
//! consecutive equal-score moves.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::{HillClimbingResult, HillClimbingRunner};
