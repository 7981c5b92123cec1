//! Uniform random move selection.

use crate::position::Position;
use crate::types::Board;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Selects a uniformly random empty position.
///
/// Unbiased across the whole empty set, not weighted toward earlier
/// indices. Returns `None` only for a full board.
pub(crate) fn choose(board: &Board, rng: &mut StdRng) -> Option<Position> {
    let moves = board.empty_positions();
    moves.choose(rng).copied()
}
