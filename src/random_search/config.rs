//! Random search configuration.

use crate::error::Result;

/// Configuration for [`RandomSearchRunner`](super::RandomSearchRunner).
///
/// # Examples
///
/// ```
/// use nqueens_search::random_search::RandomSearchConfig;
///
/// let config = RandomSearchConfig::default()
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchConfig {
    /// Maximum number of full reassignments before giving up.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: crate::DEFAULT_LIMIT,
            seed: None,
        }
    }
}

impl RandomSearchConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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
