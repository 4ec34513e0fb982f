//! Genetic Algorithm (GA).
//!
//! Evolves a small population of boards with generational replacement:
//! every generation, each offspring slot picks two parents, crosses them at
//! a single cut point and mutates one gene. The whole population is then
//! replaced by the offspring.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generation cap, selection, mutation rate
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final board, final population and score history
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover ([`reproduce`]) and one-gene
//!   mutation ([`mutate`])
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.4

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use operators::{mutate, reproduce};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
