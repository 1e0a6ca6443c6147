//! Player identification and pawn state.
//!
//! ## PlayerId
//!
//! Type-safe 1-based player identifier, matching the external protocol where
//! the first player is id 1. Slice lookups go through [`PlayerId::index`].
//!
//! ## Player
//!
//! A pawn: current position and goal, both always Ground cells on a
//! well-formed board. The rules never assume a player count; any slice of
//! players works.

use serde::{Deserialize, Serialize};

use super::pos::Pos;

/// Player identifier, 1-based.
///
/// Id 0 is not a valid player; it never matches a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player id. The first player is `PlayerId::new(1)`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// 0-based slot index into a player slice.
    ///
    /// Id 0 maps to an index no slice can contain, so lookups with it fail
    /// cleanly rather than aliasing player 1.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A pawn on the board: who it is, where it stands, where it must get to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// 1-based identifier.
    pub id: PlayerId,
    /// Current position, always a Ground cell.
    pub pos: Pos,
    /// Goal position, always a Ground cell.
    pub goal: Pos,
}

impl Player {
    /// Create a player.
    #[must_use]
    pub const fn new(id: PlayerId, pos: Pos, goal: Pos) -> Self {
        Self { id, pos, goal }
    }
}
