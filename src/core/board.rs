//! Board state and the movement graph derived from it.
//!
//! ## Board
//!
//! Holds the dimensions and the wall-occupancy set. Only Wall-classified
//! coordinates carry occupancy; Ground and Pillar coordinates have none.
//! Walls are only ever added once committed, never removed.
//!
//! Occupancy lives in an `im::HashSet`, so cloning a board shares structure
//! and is cheap. [`Board::with_wall`] relies on this to hand out
//! hypothetical next-states without touching the original.
//!
//! ## Movement Graph
//!
//! The graph is derived on demand rather than stored: two Ground cells two
//! steps apart are connected iff the Wall slot between them is unbuilt.
//! [`Board::neighbors`] enumerates the open edges of one cell.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;
use super::pos::{CellKind, Dir, Pos};

/// Game board: dimensions plus wall occupancy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    height: u16,
    width: u16,
    walls: ImHashSet<Pos>,
}

impl Board {
    /// Create a board with all walls unbuilt.
    ///
    /// Both dimensions must be odd and at least 3, so the board starts and
    /// ends with rows/columns of Ground cells.
    pub fn new(height: u16, width: u16) -> Result<Self, GameError> {
        if height < 3 || width < 3 || height % 2 == 0 || width % 2 == 0 {
            return Err(GameError::InvalidBoard { height, width });
        }
        Ok(Self {
            height,
            width,
            walls: ImHashSet::new(),
        })
    }

    /// Board height (number of rows, odd).
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Board width (number of columns, odd).
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Whether a position lies on the board.
    #[must_use]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.r < self.height && pos.c < self.width
    }

    /// Whether a wall is built at `pos`.
    ///
    /// Fail-safe for any position that does not classify as Wall: those can
    /// never hold a wall, so the answer is `false`, not an error.
    #[must_use]
    pub fn is_wall_built(&self, pos: Pos) -> bool {
        pos.kind() == CellKind::Wall && self.walls.contains(&pos)
    }

    /// Number of walls built so far.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Commit a wall at `pos`.
    ///
    /// This is the raw mutation; it does not check the reachability
    /// invariant. Gate it through [`crate::rules::can_build_wall`] (or use
    /// [`crate::state::GameState::place_wall`], which does) to keep the
    /// invariant.
    pub fn build_wall(&mut self, pos: Pos) -> Result<(), GameError> {
        if !self.in_bounds(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        if pos.kind() != CellKind::Wall {
            return Err(GameError::NotAWallCell(pos));
        }
        if self.walls.contains(&pos) {
            return Err(GameError::WallAlreadyBuilt(pos));
        }
        self.walls.insert(pos);
        Ok(())
    }

    /// Hypothetical next-state with a wall at `pos`.
    ///
    /// A structural-sharing clone: the original board is untouched, and the
    /// snapshot is safe to discard. This is how the rule validator tests
    /// candidate placements without any observable intermediate state.
    #[must_use]
    pub fn with_wall(&self, pos: Pos) -> Self {
        let mut next = self.clone();
        next.walls.insert(pos);
        next
    }

    /// Ground cells adjacent to `pos` in the movement graph.
    ///
    /// Defined for Ground positions; any other kind yields the empty set by
    /// contract. For each direction in the fixed order +c, −c, +r, −r, the
    /// cell two steps away is a neighbor iff it is in bounds and the Wall
    /// slot between is unbuilt. At most 4 results, no allocation.
    #[must_use]
    pub fn neighbors(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        let mut out = SmallVec::new();
        if pos.kind() != CellKind::Ground {
            return out;
        }
        for dir in Dir::ALL {
            let Some(far) = pos.step(dir, 2) else {
                continue;
            };
            if !self.in_bounds(far) {
                continue;
            }
            // The wall slot between pos and far exists whenever far does.
            let Some(wall) = pos.step(dir, 1) else {
                continue;
            };
            if !self.is_wall_built(wall) {
                out.push(far);
            }
        }
        out
    }

    /// Iterate over all Ground cells of the board.
    pub fn ground_cells(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height)
            .step_by(2)
            .flat_map(move |r| (0..width).step_by(2).map(move |c| Pos::new(r, c)))
    }
}
