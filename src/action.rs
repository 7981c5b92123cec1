//! Applied moves and the engine's error type.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move that has been applied to the board: a player's mark at a
/// position. Kept in the game history for replay and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Errors returned by the turn engine and the board.
///
/// All of these are local, recoverable rejections: the call fails, the
/// board and round counter are untouched, and the game stays playable
/// (or restartable when it is over).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The supplied index is not a board cell (must be 0-8).
    #[display("index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    Occupied(Position),

    /// The game is over; no move is accepted until `restart`.
    #[display("game is already over")]
    GameOver,

    /// The index was omitted but the mark is human-controlled, so no
    /// strategy is configured to choose for it.
    #[display("no strategy configured for {_0}; supply an index")]
    NoStrategy(Player),
}

impl std::error::Error for GameError {}
