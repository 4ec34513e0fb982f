//! Random search.
//!
//! The baseline strategy: throw every queen onto a random row, evaluate,
//! repeat. No memory of past states.

mod config;
mod runner;

pub use config::RandomSearchConfig;
pub use runner::{RandomSearchResult, RandomSearchRunner};
