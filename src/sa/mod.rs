//! Simulated Annealing (SA).
//!
//! Hill-climbing style neighbor proposals with a temperature-gated
//! acceptance rule. Improving moves are always taken; a move that loses
//! `|delta|` points is taken with probability `exp(delta / T)`. Each round
//! walks the temperature schedule down to zero; rounds repeat from the
//! current board until it is solved or the round budget runs out.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.2

mod config;
mod runner;

pub use config::{SaConfig, Schedule};
pub use runner::{acceptance_probability, SaResult, SaRunner};
