//! Error type for board construction and committed mutations.
//!
//! Pure queries in this crate are total and never return errors; only
//! constructors, the action resolver boundary, and the commit operations in
//! [`crate::state`] can fail. Unreachability is a normal outcome (`None`
//! from the path finder), never an error.

use super::player::PlayerId;
use super::pos::Pos;

/// Error produced by board construction or a committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board dimensions must both be odd and at least 3.
    InvalidBoard {
        /// Requested height.
        height: u16,
        /// Requested width.
        width: u16,
    },
    /// Position lies outside the board.
    OutOfBounds(Pos),
    /// Position does not classify as a wall slot.
    NotAWallCell(Pos),
    /// A wall is already built at this position.
    WallAlreadyBuilt(Pos),
    /// Position does not classify as a walkable ground cell.
    NotAGroundCell(Pos),
    /// The mutation would leave some player without a path to its goal,
    /// or a pawn move targets a cell unreachable from its current position.
    PathBlocked,
    /// No player with this id exists.
    UnknownPlayer(PlayerId),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBoard { height, width } => {
                write!(f, "Invalid board dimensions {height}x{width}: both must be odd and >= 3")
            }
            Self::OutOfBounds(pos) => write!(f, "Position {pos} is out of bounds"),
            Self::NotAWallCell(pos) => write!(f, "Position {pos} is not a wall slot"),
            Self::WallAlreadyBuilt(pos) => write!(f, "A wall is already built at {pos}"),
            Self::NotAGroundCell(pos) => write!(f, "Position {pos} is not a ground cell"),
            Self::PathBlocked => write!(f, "Mutation would cut off a player from its goal"),
            Self::UnknownPlayer(id) => write!(f, "No such player: {id}"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InvalidBoard { height: 4, width: 5 };
        assert_eq!(
            format!("{err}"),
            "Invalid board dimensions 4x5: both must be odd and >= 3"
        );
        assert_eq!(
            format!("{}", GameError::OutOfBounds(Pos::new(9, 9))),
            "Position (9, 9) is out of bounds"
        );
        assert_eq!(
            format!("{}", GameError::UnknownPlayer(PlayerId::new(3))),
            "No such player: Player 3"
        );
    }
}
