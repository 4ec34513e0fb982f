//! Property tests over boards, scoring and the search loops.

use nqueens_search::ga::reproduce;
use nqueens_search::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
use nqueens_search::random::create_rng;
use nqueens_search::random_search::{RandomSearchConfig, RandomSearchRunner};
use nqueens_search::sa::{acceptance_probability, SaConfig, SaRunner, Schedule};
use nqueens_search::{eval, neighbor, Board, Verdict};
use proptest::prelude::*;

/// Rows for a board of size `1..=max`.
fn rows(max: usize) -> impl Strategy<Value = Vec<usize>> {
    (1..=max).prop_flat_map(|n| prop::collection::vec(0..n, n))
}

/// Two row vectors of the same length.
fn parent_rows(max: usize) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (1..=max).prop_flat_map(|n| {
        (
            prop::collection::vec(0..n, n),
            prop::collection::vec(0..n, n),
        )
    })
}

proptest! {
    #[test]
    fn evaluate_stays_in_range(rows in rows(30)) {
        let board = Board::from_rows(rows).unwrap();
        let score = eval::evaluate(&board);
        let optimum = eval::max_score(board.len());
        prop_assert!(score <= optimum);
        prop_assert_eq!(score + eval::count_conflicts(&board), optimum);
    }

    #[test]
    fn optimum_iff_no_queen_in_conflict(rows in rows(10)) {
        let board = Board::from_rows(rows).unwrap();
        let any_conflict = (0..board.len())
            .any(|col| eval::queen_in_conflict(board.row(col), col, &board));
        prop_assert_eq!(eval::is_solved(&board), !any_conflict);
        prop_assert_eq!(eval::conflicted_columns(&board).is_empty(), !any_conflict);
    }

    #[test]
    fn in_conflict_is_symmetric(a in 0usize..50, b in 0usize..50, c in 0usize..50, d in 0usize..50) {
        prop_assert_eq!(eval::in_conflict(a, b, c, d), eval::in_conflict(c, d, a, b));
    }

    #[test]
    fn random_boards_are_well_formed(n in 1usize..=100, seed in any::<u64>()) {
        let mut rng = create_rng(Some(seed));
        let board = Board::random(n, &mut rng).unwrap();
        prop_assert_eq!(board.len(), n);
        prop_assert!(board.rows().iter().all(|&r| r < n));
    }

    #[test]
    fn crossover_preserves_length((x, y) in parent_rows(20), seed in any::<u64>()) {
        let mut rng = create_rng(Some(seed));
        let x = Board::from_rows(x).unwrap();
        let y = Board::from_rows(y).unwrap();
        let child = reproduce(&x, &y, &mut rng);
        prop_assert_eq!(child.len(), x.len());
        // Every gene comes from the parent at the same column.
        for col in 0..child.len() {
            prop_assert!(child.row(col) == x.row(col) || child.row(col) == y.row(col));
        }
    }

    #[test]
    fn expand_never_empty(rows in rows(20), seed in any::<u64>()) {
        let mut rng = create_rng(Some(seed));
        let board = Board::from_rows(rows).unwrap();
        let hood = neighbor::expand(&board, &mut rng);
        prop_assert!(!hood.candidates.is_empty());
        if hood.restart {
            prop_assert_eq!(hood.candidates.len(), 1);
        } else {
            let score = eval::evaluate(&board);
            prop_assert!(hood.candidates.iter().any(|c| c.score > score));
        }
        for candidate in &hood.candidates {
            prop_assert_eq!(candidate.board.len(), board.len());
            prop_assert_eq!(candidate.score, eval::evaluate(&candidate.board));
        }
    }

    #[test]
    fn acceptance_probability_is_a_probability(delta in -1000i64..1000, t in 0.0f64..100.0) {
        let p = acceptance_probability(delta, t);
        prop_assert!((0.0..=1.0).contains(&p));
        if delta > 0 || (delta == 0 && t > 0.0) {
            prop_assert_eq!(p, 1.0);
        }
    }

    #[test]
    fn temperature_never_increases(t in 0usize..200) {
        let schedule = Schedule::default();
        prop_assert!(schedule.temperature(t + 1) <= schedule.temperature(t));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn random_search_terminates_within_cap(n in 1usize..=20, seed in any::<u64>()) {
        let config = RandomSearchConfig::default().with_max_iterations(200).with_seed(seed);
        let result = RandomSearchRunner::run(n, &config).unwrap();
        prop_assert!(result.iterations <= 200);
        prop_assert_eq!(result.verdict == Verdict::Solved, eval::is_solved(&result.board));
    }

    #[test]
    fn hill_climbing_terminates_within_cap(n in 1usize..=20, seed in any::<u64>(), sideways in any::<bool>()) {
        let mut config = HillClimbingConfig::default().with_max_iterations(300).with_seed(seed);
        if sideways {
            config = config.with_sideways_moves(10);
        }
        let result = HillClimbingRunner::run(n, &config).unwrap();
        prop_assert!(result.iterations <= 300);
        prop_assert_eq!(result.verdict == Verdict::Solved, eval::is_solved(&result.board));
    }

    #[test]
    fn annealing_reports_best_board(n in 1usize..=12, seed in any::<u64>()) {
        let config = SaConfig::default().with_max_rounds(3).with_seed(seed);
        let result = SaRunner::run(n, &config).unwrap();
        prop_assert!(result.rounds <= 3);
        prop_assert_eq!(result.best_score, eval::evaluate(&result.best));
        prop_assert!(result.score_history.iter().all(|&s| s <= result.best_score));
    }
}

#[test]
fn single_queen_is_trivially_solved() {
    let board = Board::from_rows(vec![0]).unwrap();
    assert_eq!(eval::evaluate(&board), 0);
    assert!(eval::is_solved(&board));
    let result = RandomSearchRunner::run(1, &RandomSearchConfig::default()).unwrap();
    assert_eq!(result.verdict, Verdict::Solved);
    assert_eq!(result.iterations, 0);
}

#[test]
fn four_queens_solution_scores_six() {
    let board = Board::from_rows(vec![1, 3, 0, 2]).unwrap();
    assert_eq!(eval::evaluate(&board), 6);
    assert_eq!(eval::count_conflicts(&board), 0);
}
