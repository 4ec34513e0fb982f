//! Supported board sizes and iteration limits.

use crate::error::{NQueensError, Result};

/// Largest supported board size.
pub const MAX_QUEENS: usize = 100;

/// Exclusive upper bound for any iteration, round or generation limit.
pub const MAX_ITERATION_LIMIT: usize = 1_000_000;

/// Default iteration cap for random search, hill climbing and the outer
/// annealing loop.
pub const DEFAULT_LIMIT: usize = 1000;

/// Checks `1 <= size <= MAX_QUEENS`.
pub fn validate_size(size: usize) -> Result<()> {
    if (1..=MAX_QUEENS).contains(&size) {
        Ok(())
    } else {
        Err(NQueensError::InvalidSize {
            size,
            max: MAX_QUEENS,
        })
    }
}

/// Checks `1 <= limit < MAX_ITERATION_LIMIT`.
pub fn validate_limit(limit: usize) -> Result<()> {
    if (1..MAX_ITERATION_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(NQueensError::InvalidLimit {
            limit,
            max: MAX_ITERATION_LIMIT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bounds() {
        assert!(validate_size(0).is_err());
        assert!(validate_size(1).is_ok());
        assert!(validate_size(100).is_ok());
        assert_eq!(
            validate_size(101),
            Err(NQueensError::InvalidSize { size: 101, max: 100 })
        );
    }

    #[test]
    fn test_limit_bounds() {
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(999_999).is_ok());
        assert!(validate_limit(1_000_000).is_err());
    }
}
