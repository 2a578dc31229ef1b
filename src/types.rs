//! Core data structures: grid cells, walkers, and the anti-diagonal.
//!
//! A [`Walker`] owns its current position plus the full path walked so far,
//! one entry per round (the starting cell included). Movement is clamped:
//! a flip toward an axis that is already at its boundary is spent without
//! displacement, but the round is still recorded in the path.

use serde::{Deserialize, Serialize};

use crate::simulation::coin::Coin;

/// A cell on the n×n grid. Plain value type: two positions denote the same
/// cell iff their coordinates match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other` (block distance on the grid).
    pub fn distance(&self, other: &GridPosition) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Which corner a walker is converging toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    /// Starts at (0,0); heads move east (+x), tails move north (+y).
    NorthEast,
    /// Starts at (n-1,n-1); heads move west (-x), tails move south (-y).
    SouthWest,
}

/// One walker: heading, current position, and the append-only path.
#[derive(Clone, Debug)]
pub struct Walker {
    heading: Heading,
    grid_size: usize,
    position: GridPosition,
    path: Vec<GridPosition>,
}

impl Walker {
    /// The "near" walker at the south-west corner (0,0), moving east/north.
    pub fn near(grid_size: usize) -> Self {
        Self::at(Heading::NorthEast, grid_size, GridPosition::new(0, 0))
    }

    /// The "far" walker at the north-east corner (n-1,n-1), moving west/south.
    pub fn far(grid_size: usize) -> Self {
        let corner = grid_size as i32 - 1;
        Self::at(Heading::SouthWest, grid_size, GridPosition::new(corner, corner))
    }

    fn at(heading: Heading, grid_size: usize, start: GridPosition) -> Self {
        let mut path = Vec::with_capacity(grid_size);
        path.push(start);
        Self {
            heading,
            grid_size,
            position: start,
            path,
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn path(&self) -> &[GridPosition] {
        &self.path
    }

    pub fn into_path(self) -> Vec<GridPosition> {
        self.path
    }

    /// Advance one round. Heads moves along x, tails along y, always toward
    /// the target corner; a flip toward a saturated axis leaves the position
    /// unchanged. Either way the round is appended to the path.
    pub fn step(&mut self, flip: Coin) {
        let limit = self.grid_size as i32 - 1;
        match (self.heading, flip) {
            (Heading::NorthEast, Coin::Heads) if self.position.x < limit => self.position.x += 1,
            (Heading::NorthEast, Coin::Tails) if self.position.y < limit => self.position.y += 1,
            (Heading::SouthWest, Coin::Heads) if self.position.x > 0 => self.position.x -= 1,
            (Heading::SouthWest, Coin::Tails) if self.position.y > 0 => self.position.y -= 1,
            _ => {}
        }
        self.path.push(self.position);
    }
}

/// The n cells where the walkers can end up together: the SE-NW
/// anti-diagonal {(i, n-1-i)}, ordered by x. The order doubles as the
/// labeling order (A, B, C, …).
pub fn meeting_points(grid_size: usize) -> Vec<GridPosition> {
    let n = grid_size as i32;
    (0..n).map(|i| GridPosition::new(i, n - 1 - i)).collect()
}

/// Index of `pos` on the anti-diagonal, if it lies on it. The index equals
/// the x-coordinate, since cell i is (i, n-1-i).
pub fn meeting_point_index(grid_size: usize, pos: GridPosition) -> Option<usize> {
    let n = grid_size as i32;
    if pos.x >= 0 && pos.x < n && pos.y == n - 1 - pos.x {
        Some(pos.x as usize)
    } else {
        None
    }
}
