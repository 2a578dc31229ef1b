//! Walk simulator — one trial of two walkers converging across the grid.
//!
//! A trial runs exactly n-1 rounds. Each round both walkers draw one fair
//! flip each (near first, then far) and move toward the opposite corner;
//! both positions are appended to their paths whether or not the drawn move
//! displaced the walker. The walkers' coordinate sums are k and 2(n-1)-k
//! after round k, so they can share a cell only after the final round —
//! the meeting check compares final positions.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use super::coin::CoinSource;
use crate::error::SimError;
use crate::types::{meeting_point_index, GridPosition, Walker};

/// Full record of one trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub grid_size: usize,
    /// Whether both walkers ended on the same cell.
    pub met: bool,
    /// Rounds executed — always grid_size - 1.
    pub steps_taken: usize,
    /// Near walker's cells, one per round plus the start (length grid_size).
    pub near_path: Vec<GridPosition>,
    /// Far walker's cells, same shape.
    pub far_path: Vec<GridPosition>,
}

impl TrialResult {
    pub fn near_final(&self) -> GridPosition {
        *self.near_path.last().unwrap()
    }

    pub fn far_final(&self) -> GridPosition {
        *self.far_path.last().unwrap()
    }

    /// The shared cell, when the walkers met.
    pub fn meeting_point(&self) -> Option<GridPosition> {
        self.met.then(|| self.near_final())
    }

    /// Index of the meeting cell on the anti-diagonal (equals its
    /// x-coordinate), when the walkers met.
    pub fn meeting_point_index(&self) -> Option<usize> {
        self.meeting_point()
            .and_then(|p| meeting_point_index(self.grid_size, p))
    }
}

/// Run one trial on an n×n grid, drawing flips from `coin`.
///
/// Exactly n-1 rounds; for n=1 there are no rounds and both walkers share
/// (0,0) from the start.
pub fn run_trial<C: CoinSource>(grid_size: usize, coin: &mut C) -> Result<TrialResult, SimError> {
    if grid_size < 1 {
        return Err(SimError::InvalidParameter {
            name: "grid_size",
            value: grid_size,
        });
    }
    Ok(simulate_trial(grid_size, coin))
}

/// Trial body without parameter validation — [`super::run_analysis`]
/// validates once up front and calls this per trial.
pub(crate) fn simulate_trial<C: CoinSource>(grid_size: usize, coin: &mut C) -> TrialResult {
    let mut near = Walker::near(grid_size);
    let mut far = Walker::far(grid_size);

    for _ in 1..grid_size {
        near.step(coin.flip());
        far.step(coin.flip());
    }

    let met = near.position() == far.position();
    TrialResult {
        grid_size,
        met,
        steps_taken: grid_size - 1,
        near_path: near.into_path(),
        far_path: far.into_path(),
    }
}

/// One trial from a seeded [`SmallRng`].
pub fn run_trial_with_seed(grid_size: usize, seed: u64) -> Result<TrialResult, SimError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    run_trial(grid_size, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::coin::Coin;
    use crate::types::meeting_points;

    /// Plays back a fixed flip sequence — flips alternate near, far.
    struct ScriptedCoin {
        flips: Vec<Coin>,
        next: usize,
    }

    impl ScriptedCoin {
        fn new(flips: &[Coin]) -> Self {
            Self {
                flips: flips.to_vec(),
                next: 0,
            }
        }
    }

    impl CoinSource for ScriptedCoin {
        fn flip(&mut self) -> Coin {
            let c = self.flips[self.next];
            self.next += 1;
            c
        }
    }

    #[test]
    fn test_grid_size_zero_rejected() {
        assert_eq!(
            run_trial_with_seed(0, 42),
            Err(SimError::InvalidParameter {
                name: "grid_size",
                value: 0
            })
        );
    }

    #[test]
    fn test_single_cell_grid_always_meets() {
        for seed in 0..50 {
            let t = run_trial_with_seed(1, seed).unwrap();
            assert!(t.met);
            assert_eq!(t.steps_taken, 0);
            assert_eq!(t.near_path, vec![GridPosition::new(0, 0)]);
            assert_eq!(t.far_path, vec![GridPosition::new(0, 0)]);
            assert_eq!(t.meeting_point_index(), Some(0));
        }
    }

    #[test]
    fn test_path_lengths_and_steps() {
        for n in 1..=8 {
            let t = run_trial_with_seed(n, 42).unwrap();
            assert_eq!(t.steps_taken, n - 1);
            assert_eq!(t.near_path.len(), n);
            assert_eq!(t.far_path.len(), n);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = run_trial_with_seed(6, 99).unwrap();
        let b = run_trial_with_seed(6, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_meeting() {
        // n=3, rounds: near H → (1,0), far T → (2,1);
        //              near H → (2,0), far T → (2,0). Meet at cell C.
        let mut coin = ScriptedCoin::new(&[Coin::Heads, Coin::Tails, Coin::Heads, Coin::Tails]);
        let t = run_trial(3, &mut coin).unwrap();
        assert!(t.met);
        assert_eq!(
            t.near_path,
            vec![
                GridPosition::new(0, 0),
                GridPosition::new(1, 0),
                GridPosition::new(2, 0)
            ]
        );
        assert_eq!(
            t.far_path,
            vec![
                GridPosition::new(2, 2),
                GridPosition::new(2, 1),
                GridPosition::new(2, 0)
            ]
        );
        assert_eq!(t.meeting_point(), Some(GridPosition::new(2, 0)));
        assert_eq!(t.meeting_point_index(), Some(2));
    }

    #[test]
    fn test_scripted_miss() {
        // n=2: near H → (1,0), far H → (0,1). Opposite anti-diagonal ends.
        let mut coin = ScriptedCoin::new(&[Coin::Heads, Coin::Heads]);
        let t = run_trial(2, &mut coin).unwrap();
        assert!(!t.met);
        assert_eq!(t.near_final(), GridPosition::new(1, 0));
        assert_eq!(t.far_final(), GridPosition::new(0, 1));
        assert_eq!(t.meeting_point(), None);
        assert_eq!(t.meeting_point_index(), None);
    }

    #[test]
    fn test_met_final_position_is_a_meeting_point() {
        let points = meeting_points(7);
        for seed in 0..200 {
            let t = run_trial_with_seed(7, seed).unwrap();
            if t.met {
                assert!(points.contains(&t.near_final()));
                let i = t.meeting_point_index().unwrap();
                assert_eq!(points[i], t.near_final());
            } else {
                assert_ne!(t.near_final(), t.far_final());
            }
        }
    }
}
