//! Property-based tests for the walk simulator and aggregator.

use proptest::prelude::*;

use gridmeet::simulation::{run_analysis, run_trial_with_seed, theoretical_probability};
use gridmeet::types::{meeting_point_index, meeting_points};

/// Strategy: grid sizes worth exercising, including the degenerate 1×1.
fn grid_strategy() -> impl Strategy<Value = usize> {
    1usize..=12
}

proptest! {
    // 1. A trial always runs exactly n-1 rounds.
    #[test]
    fn steps_taken_is_n_minus_1(n in grid_strategy(), seed in any::<u64>()) {
        let t = run_trial_with_seed(n, seed).unwrap();
        prop_assert_eq!(t.steps_taken, n - 1);
    }

    // 2. Both paths record the start plus one entry per round.
    #[test]
    fn path_lengths_equal_n(n in grid_strategy(), seed in any::<u64>()) {
        let t = run_trial_with_seed(n, seed).unwrap();
        prop_assert_eq!(t.near_path.len(), n);
        prop_assert_eq!(t.far_path.len(), n);
    }

    // 3. Near walker: coordinates non-decreasing, at most one cell per round,
    //    always within [0, n-1].
    #[test]
    fn near_path_monotone_within_bounds(n in grid_strategy(), seed in any::<u64>()) {
        let t = run_trial_with_seed(n, seed).unwrap();
        let limit = n as i32 - 1;
        for p in &t.near_path {
            prop_assert!(p.x >= 0 && p.x <= limit);
            prop_assert!(p.y >= 0 && p.y <= limit);
        }
        for w in t.near_path.windows(2) {
            prop_assert!(w[1].x >= w[0].x);
            prop_assert!(w[1].y >= w[0].y);
            prop_assert!((w[1].x - w[0].x) + (w[1].y - w[0].y) <= 1);
        }
    }

    // 4. Far walker: mirrored — non-increasing, bounded.
    #[test]
    fn far_path_monotone_within_bounds(n in grid_strategy(), seed in any::<u64>()) {
        let t = run_trial_with_seed(n, seed).unwrap();
        let limit = n as i32 - 1;
        for p in &t.far_path {
            prop_assert!(p.x >= 0 && p.x <= limit);
            prop_assert!(p.y >= 0 && p.y <= limit);
        }
        for w in t.far_path.windows(2) {
            prop_assert!(w[1].x <= w[0].x);
            prop_assert!(w[1].y <= w[0].y);
            prop_assert!((w[0].x - w[1].x) + (w[0].y - w[1].y) <= 1);
        }
    }

    // 5. A meeting lands on the anti-diagonal, at the index given by x.
    #[test]
    fn meeting_lies_on_anti_diagonal(n in grid_strategy(), seed in any::<u64>()) {
        let t = run_trial_with_seed(n, seed).unwrap();
        if t.met {
            let final_pos = *t.near_path.last().unwrap();
            prop_assert!(meeting_points(n).contains(&final_pos));
            prop_assert_eq!(
                t.meeting_point_index(),
                meeting_point_index(n, final_pos)
            );
            prop_assert_eq!(t.meeting_point_index(), Some(final_pos.x as usize));
        }
    }

    // 6. Checking equality at the end is the same as checking every round:
    //    the coordinate sums only agree after the final round.
    #[test]
    fn met_iff_paths_ever_coincide(n in grid_strategy(), seed in any::<u64>()) {
        let t = run_trial_with_seed(n, seed).unwrap();
        let ever = t
            .near_path
            .iter()
            .zip(&t.far_path)
            .any(|(a, b)| a == b);
        prop_assert_eq!(t.met, ever);
    }

    // 7. Same seed, same trial — full paths included.
    #[test]
    fn trial_reproducible_for_seed(n in grid_strategy(), seed in any::<u64>()) {
        let a = run_trial_with_seed(n, seed).unwrap();
        let b = run_trial_with_seed(n, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    // 8. Aggregate bookkeeping stays consistent for any batch.
    #[test]
    fn aggregate_consistency(
        n in 1usize..=8,
        trials in 1usize..=200,
        seed in any::<u64>(),
    ) {
        let agg = run_analysis(n, trials, seed).unwrap();
        let tallied: u64 = agg.per_point_counts.iter().sum();
        prop_assert_eq!(tallied, agg.meeting_count);
        prop_assert!(agg.meeting_count <= agg.trial_count as u64);
        prop_assert_eq!(agg.trial_count, trials);
        prop_assert_eq!(agg.per_point_counts.len(), n);
        let p = agg.empirical_probability();
        prop_assert!((0.0..=1.0).contains(&p));
    }
}

// 9. The 1×1 grid always meets (non-proptest: exact, not statistical).
#[test]
fn single_cell_grid_always_meets() {
    for seed in 0..100 {
        let t = run_trial_with_seed(1, seed).unwrap();
        assert!(t.met);
    }
    let agg = run_analysis(1, 1_000, 42).unwrap();
    assert_eq!(agg.meeting_count, 1_000);
}

// 10. The displayed closed form is exactly 1/n.
#[test]
fn closed_form_is_reciprocal() {
    for n in 1..=10 {
        assert_eq!(theoretical_probability(n), 1.0 / n as f64);
    }
}
