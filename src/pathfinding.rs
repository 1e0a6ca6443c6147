//! Shortest paths over the movement graph.
//!
//! Breadth-first search with a FIFO frontier. Each Ground cell is enqueued
//! at most once, so a search touches at most `⌈H/2⌉·⌈W/2⌉` cells and always
//! terminates. The target's distance is returned the moment the target is
//! discovered, not when it is dequeued.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::core::{Board, Pos};

/// Shortest-path distance in moves between two Ground cells.
///
/// `Some(0)` when `start == target`; `None` when no open path exists.
/// Unreachability is a normal outcome, not an error.
///
/// Both endpoints are expected to be in-bounds Ground cells; a non-Ground
/// `start` has no neighbors, so anything other than itself is unreachable
/// from it.
///
/// ```
/// use wallwars_core::{distance, Board, Pos};
///
/// let board = Board::new(5, 5).unwrap();
/// assert_eq!(distance(&board, Pos::new(0, 2), Pos::new(4, 2)), Some(2));
/// ```
#[must_use]
pub fn distance(board: &Board, start: Pos, target: Pos) -> Option<u32> {
    if start == target {
        return Some(0);
    }

    let mut dist: FxHashMap<Pos, u32> = FxHashMap::default();
    dist.insert(start, 0);
    let mut frontier: VecDeque<Pos> = VecDeque::new();
    frontier.push_back(start);

    while let Some(pos) = frontier.pop_front() {
        let here = dist[&pos];
        for nbr in board.neighbors(pos) {
            if dist.contains_key(&nbr) {
                continue;
            }
            dist.insert(nbr, here + 1);
            if nbr == target {
                return Some(here + 1);
            }
            frontier.push_back(nbr);
        }
    }

    None
}

/// Whether any open path connects two Ground cells.
#[must_use]
pub fn can_reach(board: &Board, a: Pos, b: Pos) -> bool {
    distance(board, a, b).is_some()
}
