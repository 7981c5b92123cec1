//! Move selection strategies.
//!
//! A strategy is data, not behavior hung off an object: the engine
//! holds a [`Controller`] per mark and dispatches here when asked to
//! choose a move for a computer-controlled mark.

mod minimax;
mod random;

use crate::position::Position;
use crate::types::{Board, Player};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a computer-controlled mark picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniformly random choice among empty squares.
    Random,
    /// Exhaustive minimax search; never loses.
    Minimax,
}

impl Strategy {
    /// Chooses a move for `mark` on the given board.
    ///
    /// The board is borrowed mutably because the minimax search places
    /// and undoes probe moves in place; it is guaranteed to be unchanged
    /// when this returns. Returns `None` only for a board with no empty
    /// square, which the turn engine never passes in.
    #[instrument(skip(board, rng), fields(strategy = ?self, mark = %mark))]
    pub fn choose(&self, board: &mut Board, mark: Player, rng: &mut StdRng) -> Option<Position> {
        let chosen = match self {
            Strategy::Random => random::choose(board, rng),
            Strategy::Minimax => minimax::best_move(board, mark).map(|m| m.position),
        };
        debug!(position = ?chosen, "strategy selected move");
        chosen
    }
}

/// Who controls a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Moves are supplied by the caller (the presentation layer).
    Human,
    /// Moves are chosen by the given strategy.
    Computer(Strategy),
}
