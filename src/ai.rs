//! Random move selection for computer players.
//!
//! Picks a uniformly random legal cell and a random number of quarter turns.
//! All randomness comes from the caller's seeded generator.

use fastrand::Rng;

use crate::board::Board;

/// A placement choice: where, and how many clockwise quarter turns first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub rotation: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAi;

impl RandomAi {
    /// Choose a move, or `None` when the board has no legal cell.
    pub fn choose(&self, board: &Board, rng: &mut Rng) -> Option<Move> {
        let candidates: Vec<_> = board.valid_positions().into_iter().collect();
        if candidates.is_empty() {
            return None;
        }
        let (row, col) = candidates[rng.usize(..candidates.len())];
        Some(Move {
            row,
            col,
            rotation: rng.usize(..4),
        })
    }
}
