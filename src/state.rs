//! Committed match state: the board plus the pawns, with mutations gated
//! through the rule validator.
//!
//! The pure queries in [`crate::rules`] and [`crate::actions`] answer "would
//! this be legal"; this module is the commit layer that actually applies a
//! confirmed move or wall build. Every mutation either preserves the
//! reachability invariant or fails without touching anything.

use serde::{Deserialize, Serialize};

use crate::core::{Board, CellKind, GameError, Player, PlayerId, Pos};
use crate::pathfinding::can_reach;
use crate::rules::{can_build_wall, is_valid_board};

/// Board and pawns of a match in progress.
///
/// Construction validates shapes and the invariant, so a `GameState` is
/// well-formed for its whole lifetime. Turn order and win detection belong
/// to the host, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
}

impl GameState {
    /// Create a match state.
    ///
    /// Every player's position and goal must be an in-bounds Ground cell,
    /// and every player must be able to reach its goal.
    pub fn new(board: Board, players: Vec<Player>) -> Result<Self, GameError> {
        for p in &players {
            for pos in [p.pos, p.goal] {
                if !board.in_bounds(pos) {
                    return Err(GameError::OutOfBounds(pos));
                }
                if pos.kind() != CellKind::Ground {
                    return Err(GameError::NotAGroundCell(pos));
                }
            }
        }
        if !is_valid_board(&board, &players) {
            return Err(GameError::PathBlocked);
        }
        Ok(Self { board, players })
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All pawns, in slot order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a pawn by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Commit a wall build.
    ///
    /// Fails with [`GameError::PathBlocked`] when the wall would cut some
    /// player off from its goal; the shape errors of
    /// [`Board::build_wall`] pass through. On error nothing changes.
    pub fn place_wall(&mut self, pos: Pos) -> Result<(), GameError> {
        if !self.board.in_bounds(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        if pos.kind() != CellKind::Wall {
            return Err(GameError::NotAWallCell(pos));
        }
        if self.board.is_wall_built(pos) {
            return Err(GameError::WallAlreadyBuilt(pos));
        }
        if !can_build_wall(&self.board, &self.players, pos) {
            return Err(GameError::PathBlocked);
        }
        self.board.build_wall(pos)
    }

    /// Commit a pawn move.
    ///
    /// The target must be an in-bounds Ground cell reachable from the
    /// pawn's current position. Reachability on the undirected movement
    /// graph is transitive, so a reachable target keeps the goal reachable
    /// too and the invariant holds after the move.
    pub fn move_player(&mut self, id: PlayerId, to: Pos) -> Result<(), GameError> {
        let slot = id.index();
        if slot >= self.players.len() {
            return Err(GameError::UnknownPlayer(id));
        }
        if !self.board.in_bounds(to) {
            return Err(GameError::OutOfBounds(to));
        }
        if to.kind() != CellKind::Ground {
            return Err(GameError::NotAGroundCell(to));
        }
        if !can_reach(&self.board, self.players[slot].pos, to) {
            return Err(GameError::PathBlocked);
        }
        self.players[slot].pos = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_5x5() -> GameState {
        let board = Board::new(5, 5).unwrap();
        let players = vec![
            Player::new(PlayerId::new(1), Pos::new(0, 2), Pos::new(4, 2)),
            Player::new(PlayerId::new(2), Pos::new(4, 2), Pos::new(0, 2)),
        ];
        GameState::new(board, players).unwrap()
    }

    #[test]
    fn test_new_rejects_non_ground_positions() {
        let board = Board::new(5, 5).unwrap();
        let players = vec![Player::new(PlayerId::new(1), Pos::new(0, 1), Pos::new(4, 2))];
        assert_eq!(
            GameState::new(board, players),
            Err(GameError::NotAGroundCell(Pos::new(0, 1)))
        );
    }

    #[test]
    fn test_new_rejects_out_of_bounds_goal() {
        let board = Board::new(5, 5).unwrap();
        let players = vec![Player::new(PlayerId::new(1), Pos::new(0, 0), Pos::new(6, 0))];
        assert_eq!(
            GameState::new(board, players),
            Err(GameError::OutOfBounds(Pos::new(6, 0)))
        );
    }

    #[test]
    fn test_place_wall_commits_when_legal() {
        let mut state = match_5x5();
        state.place_wall(Pos::new(1, 2)).unwrap();
        assert!(state.board().is_wall_built(Pos::new(1, 2)));
    }

    #[test]
    fn test_place_wall_refuses_to_seal_a_player() {
        let board = Board::new(3, 3).unwrap();
        let players = vec![Player::new(PlayerId::new(1), Pos::new(0, 0), Pos::new(2, 2))];
        let mut state = GameState::new(board, players).unwrap();

        state.place_wall(Pos::new(0, 1)).unwrap();
        assert_eq!(state.place_wall(Pos::new(1, 0)), Err(GameError::PathBlocked));
        // The refused wall left the board alone.
        assert!(!state.board().is_wall_built(Pos::new(1, 0)));
        assert_eq!(state.board().wall_count(), 1);
    }

    #[test]
    fn test_move_player_updates_position() {
        let mut state = match_5x5();
        state.move_player(PlayerId::new(1), Pos::new(2, 2)).unwrap();
        assert_eq!(state.player(PlayerId::new(1)).unwrap().pos, Pos::new(2, 2));
        // Other pawn untouched.
        assert_eq!(state.player(PlayerId::new(2)).unwrap().pos, Pos::new(4, 2));
    }

    #[test]
    fn test_move_player_rejections() {
        let mut state = match_5x5();
        assert_eq!(
            state.move_player(PlayerId::new(3), Pos::new(2, 2)),
            Err(GameError::UnknownPlayer(PlayerId::new(3)))
        );
        assert_eq!(
            state.move_player(PlayerId::new(1), Pos::new(1, 2)),
            Err(GameError::NotAGroundCell(Pos::new(1, 2)))
        );
        assert_eq!(
            state.move_player(PlayerId::new(1), Pos::new(0, 6)),
            Err(GameError::OutOfBounds(Pos::new(0, 6)))
        );
    }

    #[test]
    fn test_move_player_rejects_unreachable_target() {
        let board = Board::new(3, 3).unwrap();
        let players = vec![Player::new(PlayerId::new(1), Pos::new(0, 0), Pos::new(0, 0))];
        let mut state = GameState::new(board, players).unwrap();
        state.place_wall(Pos::new(0, 1)).unwrap();
        state.place_wall(Pos::new(1, 0)).unwrap();

        assert_eq!(
            state.move_player(PlayerId::new(1), Pos::new(2, 2)),
            Err(GameError::PathBlocked)
        );
        assert_eq!(state.player(PlayerId::new(1)).unwrap().pos, Pos::new(0, 0));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut state = match_5x5();
        state.place_wall(Pos::new(1, 2)).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
