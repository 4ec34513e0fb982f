//! Board model.
//!
//! A [`Board`] holds one queen per column: index = column, value = row.
//! The one-queen-per-column invariant is structural, so only row and
//! diagonal attacks can ever occur.

use std::fmt;

use rand::Rng;

use crate::error::{NQueensError, Result};
use crate::eval;

/// One complete assignment of queen rows to columns.
///
/// Equality and hashing are by value, so two boards with the same rows are
/// the same search state.
///
/// # Examples
///
/// ```
/// use nqueens_search::Board;
///
/// let board = Board::from_rows(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(board.len(), 4);
/// assert_eq!(board.row(1), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board of size `n` with every row drawn uniformly from
    /// `[0, n - 1]`.
    ///
    /// # Errors
    /// [`NQueensError::InvalidSize`] when `n < 1`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        if n < 1 {
            return Err(NQueensError::InvalidSize {
                size: n,
                max: crate::MAX_QUEENS,
            });
        }
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Ok(Self { rows })
    }

    /// Creates a board from an explicit row per column.
    ///
    /// # Errors
    /// [`NQueensError::InvalidSize`] for an empty assignment and
    /// [`NQueensError::InvalidRow`] for a row outside the board.
    pub fn from_rows(rows: Vec<usize>) -> Result<Self> {
        let size = rows.len();
        if size < 1 {
            return Err(NQueensError::InvalidSize {
                size,
                max: crate::MAX_QUEENS,
            });
        }
        if let Some((column, &row)) = rows.iter().enumerate().find(|&(_, &r)| r >= size) {
            return Err(NQueensError::InvalidRow { column, row, size });
        }
        Ok(Self { rows })
    }

    /// Number of columns (and queens).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: construction rejects empty boards.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row of the queen in `column`.
    ///
    /// # Panics
    /// Panics if `column >= len()`.
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Rows indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns a copy with the queen in `column` moved to `row`.
    pub(crate) fn with_row(&self, column: usize, row: usize) -> Self {
        debug_assert!(row < self.len());
        let mut next = self.clone();
        next.rows[column] = row;
        next
    }

    pub(crate) fn set_row(&mut self, column: usize, row: usize) {
        debug_assert!(row < self.len());
        self.rows[column] = row;
    }

    /// Places every queen on a uniformly random row (random restart).
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let n = self.rows.len();
        for row in self.rows.iter_mut() {
            *row = rng.random_range(0..n);
        }
    }

    /// Builds a board from already-validated rows.
    pub(crate) fn from_rows_unchecked(rows: Vec<usize>) -> Self {
        debug_assert!(!rows.is_empty() && rows.iter().all(|&r| r < rows.len()));
        Self { rows }
    }
}

/// Renders one line per row: `.` for an empty square, `q` for a safe queen
/// and `Q` for a queen under attack.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conflicted = eval::conflicted_columns(self);
        for row in 0..self.len() {
            for (column, &queen_row) in self.rows.iter().enumerate() {
                let cell = if queen_row != row {
                    '.'
                } else if conflicted.contains(&column) {
                    'Q'
                } else {
                    'q'
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
