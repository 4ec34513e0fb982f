//! Error types for N-Queens search.
//!
//! Only configuration problems are errors. A strategy that runs out of
//! iterations without reaching the optimum is not an error; it reports
//! [`Verdict::GaveUp`](crate::Verdict::GaveUp) with its best-effort board.

use thiserror::Error;

/// Main error type for board construction and search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NQueensError {
    /// Board size outside `1..=max`.
    #[error("board size must be in 1..={max}, got {size}")]
    InvalidSize { size: usize, max: usize },

    /// Iteration limit outside `1..max`.
    #[error("iteration limit must be in 1..{max}, got {limit}")]
    InvalidLimit { limit: usize, max: usize },

    /// Unknown strategy name or menu number.
    #[error("unknown strategy selector: {0}")]
    InvalidStrategySelector(String),

    /// A strategy parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicit row assignment outside `[0, size - 1]`.
    #[error("row {row} in column {column} is outside a board of size {size}")]
    InvalidRow {
        column: usize,
        row: usize,
        size: usize,
    },
}

/// Result type alias for N-Queens operations.
pub type Result<T> = std::result::Result<T, NQueensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = NQueensError::InvalidSize { size: 0, max: 100 };
        assert_eq!(err.to_string(), "board size must be in 1..=100, got 0");

        let err = NQueensError::InvalidLimit {
            limit: 0,
            max: 1_000_000,
        };
        assert_eq!(err.to_string(), "iteration limit must be in 1..1000000, got 0");

        let err = NQueensError::InvalidStrategySelector("7".into());
        assert_eq!(err.to_string(), "unknown strategy selector: 7");
    }
}
