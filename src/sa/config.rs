//! SA configuration and temperature schedule.

use crate::error::{NQueensError, Result};

/// Exponential temperature schedule with a hard horizon:
/// `T(t) = k * exp(-lam * t)` for `t < limit`, else `0`.
///
/// The schedule is monotonically non-increasing and reaches exactly zero
/// at `limit`, which ends an annealing round.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Initial temperature.
    pub k: f64,
    /// Decay rate.
    pub lam: f64,
    /// Number of steps per round; `T(limit) == 0`.
    pub limit: usize,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            k: 20.0,
            lam: 0.005,
            limit: 100,
        }
    }
}

impl Schedule {
    pub fn new(k: f64, lam: f64, limit: usize) -> Self {
        Self { k, lam, limit }
    }

    /// Temperature at step `t`.
    pub fn temperature(&self, t: usize) -> f64 {
        if t < self.limit {
            self.k * (-self.lam * t as f64).exp()
        } else {
            0.0
        }
    }

    /// Validates the schedule parameters.
    pub fn validate(&self) -> Result<()> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(NQueensError::InvalidConfig(format!(
                "schedule k must be positive and finite, got {}",
                self.k
            )));
        }
        if !(self.lam.is_finite() && self.lam >= 0.0) {
            return Err(NQueensError::InvalidConfig(format!(
                "schedule lam must be non-negative and finite, got {}",
                self.lam
            )));
        }
        if self.limit == 0 || self.limit >= crate::MAX_ITERATION_LIMIT {
            return Err(NQueensError::InvalidConfig(format!(
                "schedule limit must be in 1..{}, got {}",
                crate::MAX_ITERATION_LIMIT,
                self.limit
            )));
        }
        Ok(())
    }
}

/// Configuration for the Simulated Annealing strategy.
///
/// # Examples
///
/// ```
/// use nqueens_search::sa::{SaConfig, Schedule};
///
/// let config = SaConfig::default()
///     .with_schedule(Schedule::new(30.0, 0.01, 200))
///     .with_max_rounds(500)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Temperature schedule for one round.
    pub schedule: Schedule,

    /// Maximum number of annealing rounds before giving up.
    pub max_rounds: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            schedule: Schedule::default(),
            max_rounds: crate::DEFAULT_LIMIT,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::limits::validate_limit(self.max_rounds)?;
        self.schedule.validate()
    }
}
