//! Exhaustive minimax search over the 3x3 board.
//!
//! O is the maximizing side and X the minimizing side, regardless of
//! which seat the computer holds: a completed O line scores +10, a
//! completed X line -10, and a full board with no line 0. Scores are
//! absolute and never depth-adjusted, so the search does not prefer a
//! faster win over a slower one (or a slower loss over a faster one).
//! That matches the game this engine reimplements and is kept
//! deliberately; the first-index tie-break makes move choice
//! deterministic anyway.
//!
//! The search carries no pruning and no depth limit beyond the board
//! itself, which is acceptable only at 3x3 (at most 9! playouts). Do
//! not reuse it for larger boards without adding pruning or a
//! transposition table.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Score for a position where O has completed a line.
const O_WINS: i32 = 10;
/// Score for a position where X has completed a line.
const X_WINS: i32 = -10;
/// Score for a full board with no line.
const DRAW: i32 = 0;

/// A candidate move paired with the score of the position it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScoredMove {
    /// Where the mark would be placed.
    pub position: Position,
    /// Minimax value of the resulting position.
    pub score: i32,
}

/// Scores a position if it is terminal, in the fixed order the game
/// defines: X line, then O line, then full board.
fn terminal_score(board: &Board) -> Option<i32> {
    if rules::winning_line(board, Player::X) {
        Some(X_WINS)
    } else if rules::winning_line(board, Player::O) {
        Some(O_WINS)
    } else if board.is_full() {
        Some(DRAW)
    } else {
        None
    }
}

/// Returns the minimax value of the position with `to_move` to play.
///
/// Probes every empty position in ascending order by placing the mark,
/// recursing for the opponent, and undoing the placement. The board is
/// identical to its input state when this returns.
fn search(board: &mut Board, to_move: Player) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mut best: Option<i32> = None;
    for pos in board.empty_positions() {
        board.set(pos, Square::Occupied(to_move));
        let score = search(board, to_move.opponent());
        board.set(pos, Square::Empty);

        best = Some(match best {
            None => score,
            Some(current) => match to_move {
                Player::O => current.max(score),
                Player::X => current.min(score),
            },
        });
    }

    // A non-terminal position always has at least one empty square.
    best.unwrap_or(DRAW)
}

/// Selects the optimal move for `to_move`.
///
/// Ties between equal-scoring moves resolve to the first position in
/// ascending index order. Returns `None` only for a terminal position,
/// which the turn engine never passes in.
#[instrument(skip(board), fields(to_move = %to_move))]
pub(crate) fn best_move(board: &mut Board, to_move: Player) -> Option<ScoredMove> {
    if terminal_score(board).is_some() {
        return None;
    }

    let mut best: Option<ScoredMove> = None;
    for pos in board.empty_positions() {
        board.set(pos, Square::Occupied(to_move));
        let score = search(board, to_move.opponent());
        board.set(pos, Square::Empty);

        let better = match best {
            None => true,
            Some(current) => match to_move {
                Player::O => score > current.score,
                Player::X => score < current.score,
            },
        };
        if better {
            best = Some(ScoredMove {
                position: pos,
                score,
            });
        }
    }

    best
}
