//! Core types: coordinates, cell classification, the board, players, errors.
//!
//! Everything here is plain data plus pure queries; the traversal and rule
//! layers build on these without any UI, storage, or network coupling.

pub mod board;
pub mod error;
pub mod player;
pub mod pos;

pub use board::Board;
pub use error::GameError;
pub use player::{Player, PlayerId};
pub use pos::{CellKind, Dir, Pos};
