//! Parent selection for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Selection strategy for choosing parents.
///
/// Scores follow the evaluation scale: higher is better.
///
/// # Examples
///
/// ```
/// use nqueens_search::ga::Selection;
///
/// // Any individual, with replacement
/// let sel = Selection::Uniform;
///
/// // Best of 3 random picks
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Uniform random pick by index, with replacement. No selection
    /// pressure; all progress comes from crossover and mutation.
    #[default]
    Uniform,

    /// Tournament selection: pick `k` individuals at random, keep the one
    /// with the highest score (first wins on ties).
    ///
    /// `Tournament(1)` is equivalent to `Uniform`.
    Tournament(usize),
}

impl Selection {
    /// Selects a parent index given the population's scores.
    ///
    /// # Panics
    /// Panics if `scores` is empty.
    pub fn select<R: Rng>(&self, scores: &[usize], rng: &mut R) -> usize {
        assert!(!scores.is_empty(), "cannot select from empty population");

        match self {
            Selection::Uniform => rng.random_range(0..scores.len()),
            Selection::Tournament(k) => tournament(scores, *k, rng),
        }
    }
}

fn tournament<R: Rng>(scores: &[usize], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = scores.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if scores[idx] > scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_uniform_covers_population() {
        let scores = [1, 5, 3, 2];
        let mut rng = create_rng(Some(42));

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[Selection::Uniform.select(&scores, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let scores = [1, 5, 10, 2];
        let mut rng = create_rng(Some(42));

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[Selection::Tournament(4).select(&scores, &mut rng)] += 1;
        }
        // 1 - (3/4)^4 ≈ 68% of tournaments contain index 2.
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {}/{n}",
            counts[2]
        );
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(Some(42));
        assert_eq!(Selection::Uniform.select(&[3], &mut rng), 0);
        assert_eq!(Selection::Tournament(3).select(&[3], &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(Some(42));
        Selection::Uniform.select(&[], &mut rng);
    }
}
