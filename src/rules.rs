//! The reachability invariant and hypothetical wall validation.
//!
//! The invariant: every player always has a path of open Ground cells from
//! its position to its goal. [`can_build_wall`] checks a candidate wall
//! against it by validating a snapshot next-state, so the base board is
//! never mutated and no inconsistent state is observable at any point.

use crate::core::{Board, CellKind, Player, Pos};
use crate::pathfinding::can_reach;

/// Whether every player can reach its goal on this board.
///
/// Generalizes to any number of players; an empty slice is trivially valid.
#[must_use]
pub fn is_valid_board(board: &Board, players: &[Player]) -> bool {
    players.iter().all(|p| can_reach(board, p.pos, p.goal))
}

/// Whether a wall may be built at `wall_pos` without cutting any player off
/// from its goal.
///
/// Returns `false` for an already-built slot, and for positions that are
/// out of bounds or do not classify as Wall (nothing can ever be built
/// there). Otherwise the candidate is tested on a snapshot produced by
/// [`Board::with_wall`]; the board passed in is unchanged on every path.
#[must_use]
pub fn can_build_wall(board: &Board, players: &[Player], wall_pos: Pos) -> bool {
    if board.is_wall_built(wall_pos) {
        return false;
    }
    if !board.in_bounds(wall_pos) || wall_pos.kind() != CellKind::Wall {
        return false;
    }
    is_valid_board(&board.with_wall(wall_pos), players)
}
