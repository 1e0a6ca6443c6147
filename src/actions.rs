//! The click-to-action resolver, the sole entry point for UI legality
//! queries.
//!
//! A click resolves to an optional action cost: `Some(n)` means the click
//! triggers `n` abstract actions (moves for a Ground cell, a single build
//! for a Wall slot), `None` means the clicked cell is not actionable. One
//! representation for "no legal action" regardless of cell kind.

use crate::core::{Board, CellKind, GameError, Player, PlayerId, Pos};
use crate::pathfinding::distance;
use crate::rules::can_build_wall;

/// Number of abstract actions a click at `clicked` would trigger for
/// `player`.
///
/// - Ground: the move count to reach the cell, `None` if unreachable.
///   Clicking the player's own cell costs `Some(0)`.
/// - Wall: `Some(1)` if the wall may be built, `None` otherwise.
/// - Pillar: `None`, unconditionally.
///
/// Clicks outside the board and unknown player ids are rejected at this
/// boundary rather than treated as dead clicks, so hosts surface bugs in
/// their hit-testing instead of silently ignoring them.
pub fn actions_for_click(
    board: &Board,
    players: &[Player],
    player: PlayerId,
    clicked: Pos,
) -> Result<Option<u32>, GameError> {
    if !board.in_bounds(clicked) {
        return Err(GameError::OutOfBounds(clicked));
    }
    let mover = players
        .get(player.index())
        .ok_or(GameError::UnknownPlayer(player))?;

    Ok(match clicked.kind() {
        CellKind::Ground => distance(board, mover.pos, clicked),
        CellKind::Wall => can_build_wall(board, players, clicked).then_some(1),
        CellKind::Pillar => None,
    })
}
