//! Board crossover and mutation.
//!
//! # Crossover
//!
//! - [`reproduce`]: single-point crossover. The child keeps the head of the
//!   first parent and the tail of the second.
//!
//! # Mutation
//!
//! - [`mutate`]: move one random queen to a random row.

use rand::Rng;

use crate::board::Board;

/// Single-point crossover.
///
/// Draws a cut `c` uniformly from `[1, n - 1]` and returns the first
/// `n - c` rows of `x` followed by the last `c` rows of `y`. The child has
/// the same length as its parents. A board of size 1 has no cut point;
/// the child is a copy of `x`.
///
/// # Panics
/// Panics if the parents have different lengths.
///
/// # Examples
///
/// ```
/// use nqueens_search::{ga::reproduce, Board};
///
/// let mut rng = rand::rng();
/// let x = Board::from_rows(vec![0, 0, 0, 0]).unwrap();
/// let y = Board::from_rows(vec![3, 3, 3, 3]).unwrap();
/// let child = reproduce(&x, &y, &mut rng);
/// assert_eq!(child.len(), 4);
/// assert_eq!(child.row(0), 0);
/// assert_eq!(child.row(3), 3);
/// ```
pub fn reproduce<R: Rng>(x: &Board, y: &Board, rng: &mut R) -> Board {
    let n = x.len();
    assert_eq!(n, y.len(), "parents must have equal length");

    if n == 1 {
        return x.clone();
    }

    let cut = rng.random_range(1..n);
    let split = n - cut;
    let rows = x.rows()[..split]
        .iter()
        .chain(&y.rows()[split..])
        .copied()
        .collect();
    Board::from_rows_unchecked(rows)
}

/// Reassigns one uniformly chosen column to a uniformly random row.
///
/// The new row may equal the old one.
pub fn mutate<R: Rng>(board: &mut Board, rng: &mut R) {
    let n = board.len();
    let column = rng.random_range(0..n);
    let row = rng.random_range(0..n);
    board.set_row(column, row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn board(rows: &[usize]) -> Board {
        Board::from_rows(rows.to_vec()).unwrap()
    }

    #[test]
    fn test_reproduce_is_single_point() {
        let mut rng = create_rng(Some(42));
        let x = board(&[0, 0, 0, 0, 0, 0]);
        let y = board(&[5, 5, 5, 5, 5, 5]);

        for _ in 0..200 {
            let child = reproduce(&x, &y, &mut rng);
            assert_eq!(child.len(), 6);
            let split = child.rows().iter().position(|&r| r == 5).unwrap();
            // Head from x, at least one gene from each parent.
            assert!((1..=5).contains(&split), "split at {split}");
            assert!(child.rows()[..split].iter().all(|&r| r == 0));
            assert!(child.rows()[split..].iter().all(|&r| r == 5));
        }
    }

    #[test]
    fn test_reproduce_covers_all_cuts() {
        let mut rng = create_rng(Some(7));
        let x = board(&[0, 0, 0, 0]);
        let y = board(&[3, 3, 3, 3]);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let child = reproduce(&x, &y, &mut rng);
            let split = child.rows().iter().position(|&r| r == 3).unwrap();
            seen[split] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
    }

    #[test]
    fn test_reproduce_single_queen() {
        let mut rng = create_rng(Some(1));
        let child = reproduce(&board(&[0]), &board(&[0]), &mut rng);
        assert_eq!(child.rows(), &[0]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_reproduce_length_mismatch_panics() {
        let mut rng = create_rng(Some(1));
        reproduce(&board(&[0, 1]), &board(&[0, 1, 2]), &mut rng);
    }

    #[test]
    fn test_mutate_changes_at_most_one_gene() {
        let mut rng = create_rng(Some(42));
        for _ in 0..100 {
            let original = board(&[0, 1, 2, 3, 4, 5, 6, 7]);
            let mut mutated = original.clone();
            mutate(&mut mutated, &mut rng);
            let diffs = original
                .rows()
                .iter()
                .zip(mutated.rows())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diffs <= 1);
            assert!(mutated.rows().iter().all(|&r| r < 8));
        }
    }
}
