//! Hill climbing configuration.

use crate::error::Result;

/// Configuration for [`HillClimbingRunner`](super::HillClimbingRunner).
///
/// # Examples
///
/// ```
/// use nqueens_search::hill_climbing::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(2000)
///     .with_sideways_moves(50);
/// assert!(config.allow_sideways);
/// assert_eq!(config.max_sideways_moves, 50);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Maximum number of climbing steps before giving up.
    pub max_iterations: usize,

    /// Whether equal-score neighbors may be adopted.
    pub allow_sideways: bool,

    /// Maximum number of consecutive sideways moves. Reset by any strict
    /// improvement or restart.
    pub max_sideways_moves: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: crate::DEFAULT_LIMIT,
            allow_sideways: false,
            max_sideways_moves: 100,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables sideways moves with a budget of `max` consecutive moves.
    pub fn with_sideways_moves(mut self, max: usize) -> Self {
        self.allow_sideways = true;
        self.max_sideways_moves = max;
        self
    }

    /// Disables sideways moves.
    pub fn without_sideways_moves(mut self) -> Self {
        self.allow_sideways = false;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::limits::validate_limit(self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbingConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!(!config.allow_sideways);
        assert_eq!(config.max_sideways_moves, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sideways_toggle() {
        let config = HillClimbingConfig::default().with_sideways_moves(10);
        assert!(config.allow_sideways);
        assert_eq!(config.max_sideways_moves, 10);
        assert!(!config.without_sideways_moves().allow_sideways);
    }

    #[test]
    fn test_validate_bad_limit() {
        assert!(HillClimbingConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }
}
