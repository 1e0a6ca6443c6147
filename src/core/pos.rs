//! Board coordinates and the parity-based cell classification.
//!
//! ## Coordinate System
//!
//! Walls and the junctions between four cells (pillars) also count for the
//! coordinate system, so the number of rows/columns with walkable cells is
//! half the board's size, rounding up. Both dimensions are odd: the board
//! starts and ends with a row/column of walkable cells.
//!
//! The first coordinate is the row (`r`, y-axis), the second the column
//! (`c`, x-axis). The kind of a cell is determined purely by parity:
//!
//! | r    | c    | kind   |
//! |------|------|--------|
//! | even | even | Ground |
//! | even | odd  | Wall   |
//! | odd  | even | Wall   |
//! | odd  | odd  | Pillar |

use serde::{Deserialize, Serialize};

/// A board coordinate.
///
/// Positions are plain pairs; whether a position is in bounds depends on the
/// board it is used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    /// Row (y-axis).
    pub r: u16,
    /// Column (x-axis).
    pub c: u16,
}

impl Pos {
    /// Create a position from row and column.
    #[must_use]
    pub const fn new(r: u16, c: u16) -> Self {
        Self { r, c }
    }

    /// Classify this coordinate by the parity of its row and column.
    ///
    /// Total and pure: every coordinate has exactly one kind.
    ///
    /// ```
    /// use wallwars_core::{CellKind, Pos};
    ///
    /// assert_eq!(Pos::new(0, 0).kind(), CellKind::Ground);
    /// assert_eq!(Pos::new(0, 1).kind(), CellKind::Wall);
    /// assert_eq!(Pos::new(1, 0).kind(), CellKind::Wall);
    /// assert_eq!(Pos::new(1, 1).kind(), CellKind::Pillar);
    /// ```
    #[must_use]
    pub const fn kind(self) -> CellKind {
        match (self.r % 2, self.c % 2) {
            (0, 0) => CellKind::Ground,
            (1, 1) => CellKind::Pillar,
            _ => CellKind::Wall,
        }
    }

    /// Step `magnitude` cells in a direction.
    ///
    /// Returns `None` when the step would leave the coordinate space on the
    /// negative side. Upper bounds are the board's concern.
    #[must_use]
    pub(crate) fn step(self, dir: Dir, magnitude: u16) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = i32::from(self.r) + dr * i32::from(magnitude);
        let c = i32::from(self.c) + dc * i32::from(magnitude);
        if r < 0 || c < 0 {
            return None;
        }
        Some(Pos::new(r as u16, c as u16))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

/// Kind of a board coordinate, derived from parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Walkable cell (both coordinates even).
    Ground,
    /// Slot between two ground cells where a wall may be built.
    Wall,
    /// Junction between four cells; never walkable, never buildable.
    Pillar,
}

/// Cardinal direction on the grid.
///
/// The order of [`Dir::ALL`] fixes the neighbor enumeration order: +c, −c,
/// +r, −r. The order carries no game meaning but keeps traversals
/// deterministic for reproducible tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dir {
    /// +c
    East,
    /// −c
    West,
    /// +r
    South,
    /// −r
    North,
}

impl Dir {
    /// All four directions in fixed enumeration order.
    pub const ALL: [Dir; 4] = [Dir::East, Dir::West, Dir::South, Dir::North];

    /// Row/column offset of a unit step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Dir::East => (0, 1),
            Dir::West => (0, -1),
            Dir::South => (1, 0),
            Dir::North => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_exhaustive_small_grid() {
        for r in 0u16..4 {
            for c in 0u16..4 {
                let expected = match (r % 2, c % 2) {
                    (0, 0) => CellKind::Ground,
                    (0, 1) | (1, 0) => CellKind::Wall,
                    _ => CellKind::Pillar,
                };
                assert_eq!(Pos::new(r, c).kind(), expected, "at ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_step_in_bounds() {
        let p = Pos::new(2, 2);
        assert_eq!(p.step(Dir::East, 2), Some(Pos::new(2, 4)));
        assert_eq!(p.step(Dir::West, 2), Some(Pos::new(2, 0)));
        assert_eq!(p.step(Dir::South, 1), Some(Pos::new(3, 2)));
        assert_eq!(p.step(Dir::North, 2), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_step_off_the_negative_edge() {
        let origin = Pos::new(0, 0);
        assert_eq!(origin.step(Dir::West, 1), None);
        assert_eq!(origin.step(Dir::North, 2), None);
        assert_eq!(origin.step(Dir::East, 1), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_dir_order_is_fixed() {
        // Neighbor enumeration order depends on this.
        assert_eq!(Dir::ALL, [Dir::East, Dir::West, Dir::South, Dir::North]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Pos::new(3, 7)), "(3, 7)");
    }

    #[test]
    fn test_serialization() {
        let pos = Pos::new(4, 2);
        let json = serde_json::to_string(&pos).unwrap();
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, back);
    }
}
