//! # wallwars-core
//!
//! Rules engine for a grid-based wall-building strategy game: pawns move
//! between walkable cells while players erect walls that block movement,
//! under the invariant that every player always keeps at least one open
//! path to its goal.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: every rule query is a function of the values passed
//!    in. No UI, storage, or network coupling; hosts consume the API and
//!    own rendering, turn order, and transport.
//!
//! 2. **N-Player First**: the validator takes a slice of players. Two is
//!    the common case, nothing assumes it.
//!
//! 3. **Snapshots over revert discipline**: hypothetical wall placements
//!    are tested on cheap structural-sharing clones of the board, never by
//!    mutating and reverting shared state.
//!
//! ## Modules
//!
//! - `core`: coordinates, cell classification, the board and its movement
//!   graph, players, errors
//! - `pathfinding`: breadth-first shortest paths and reachability
//! - `rules`: the reachability invariant and wall-placement validation
//! - `actions`: the click-to-action resolver consumed by UIs
//! - `state`: committed match state with invariant-gated mutations

pub mod actions;
pub mod core;
pub mod pathfinding;
pub mod rules;
pub mod state;

// Re-export commonly used items
pub use crate::core::{Board, CellKind, Dir, GameError, Player, PlayerId, Pos};

pub use crate::actions::actions_for_click;
pub use crate::pathfinding::{can_reach, distance};
pub use crate::rules::{can_build_wall, is_valid_board};
pub use crate::state::GameState;
