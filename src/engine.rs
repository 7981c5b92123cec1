//! The turn engine.
//!
//! Owns the authoritative game state: board, 1-based round counter, and
//! terminal flag. All board mutation goes through [`Game::play_round`];
//! the win/draw rules are evaluated after every placement and the move
//! selector is consulted when the caller supplies no index.

use crate::action::{GameError, Move};
use crate::position::Position;
use crate::rules;
use crate::strategy::{Controller, Strategy};
use crate::types::{Board, Player, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// The board filled with no line.
    Draw,
}

/// What a round produced: either the game ended or the turn passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// The game continues; the given mark moves next.
    TurnChanged(Player),
    /// The game is over.
    Finished(Outcome),
}

/// Static per-game configuration: who controls each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Controller for mark X.
    pub x: Controller,
    /// Controller for mark O.
    pub o: Controller,
}

impl GameConfig {
    /// Returns the controller for the given mark.
    pub fn controller(&self, mark: Player) -> Controller {
        match mark {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for GameConfig {
    /// Human X against an unbeatable computer O.
    fn default() -> Self {
        Self {
            x: Controller::Human,
            o: Controller::Computer(Strategy::Minimax),
        }
    }
}

/// Tic-tac-toe turn engine.
///
/// X moves on odd rounds and O on even rounds. Once the game reaches a
/// terminal state no move is accepted until [`Game::restart`].
#[derive(Debug)]
pub struct Game {
    board: Board,
    round: u32,
    over: bool,
    history: Vec<Move>,
    config: GameConfig,
    rng: StdRng,
}

impl Game {
    /// Creates a new game with an OS-seeded rng.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_os_rng())
    }

    /// Creates a new game with a fixed rng seed, for reproducible play.
    #[instrument]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, rng: StdRng) -> Self {
        info!(?config, "creating new game");
        Self {
            board: Board::new(),
            round: 1,
            over: false,
            history: Vec::new(),
            config,
            rng,
        }
    }

    /// Plays one round as the current mark.
    ///
    /// With `Some(index)` the mark is placed there; with `None` the
    /// strategy configured for the current mark chooses. On success the
    /// returned event says whether the game ended or whose turn is next.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game is already over.
    /// - [`GameError::OutOfBounds`] if the index is not 0-8.
    /// - [`GameError::Occupied`] if the square already holds a mark.
    /// - [`GameError::NoStrategy`] if the index is omitted and the
    ///   current mark is human-controlled.
    ///
    /// On error the board, round, and history are unchanged.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_round(&mut self, index: Option<usize>) -> Result<RoundEvent, GameError> {
        if self.over {
            warn!("move attempted after game over");
            return Err(GameError::GameOver);
        }

        let mark = self.current_player();
        let pos = match index {
            Some(i) => Position::from_index(i).ok_or(GameError::OutOfBounds(i))?,
            None => self.select_move(mark)?,
        };

        self.board.place(pos, mark)?;
        self.history.push(Move::new(mark, pos));
        debug!(%mark, %pos, "mark placed");

        if rules::winning_line(&self.board, mark) {
            info!(winner = %mark, "game won");
            self.over = true;
            return Ok(RoundEvent::Finished(Outcome::Winner(mark)));
        }
        if rules::is_full(&self.board) {
            info!("game drawn");
            self.over = true;
            return Ok(RoundEvent::Finished(Outcome::Draw));
        }

        self.round += 1;
        Ok(RoundEvent::TurnChanged(self.current_player()))
    }

    /// Asks the configured strategy for the current mark's move.
    fn select_move(&mut self, mark: Player) -> Result<Position, GameError> {
        let strategy = match self.config.controller(mark) {
            Controller::Computer(strategy) => strategy,
            Controller::Human => {
                warn!(%mark, "index omitted for human-controlled mark");
                return Err(GameError::NoStrategy(mark));
            }
        };

        // A non-terminal game always has an empty square, so the
        // strategy always finds a move.
        strategy
            .choose(&mut self.board, mark, &mut self.rng)
            .ok_or(GameError::GameOver)
    }

    /// Resets the board and round counter for a fresh game with the
    /// same configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("restarting game");
        self.board.reset();
        self.round = 1;
        self.over = false;
        self.history.clear();
    }

    /// Returns the mark to move: X on odd rounds, O on even rounds.
    pub fn current_player(&self) -> Player {
        if self.round % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the 1-based round counter.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Checks whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at the given index, for rendering.
    /// `None` if the index is out of bounds.
    pub fn cell(&self, index: usize) -> Option<Square> {
        Position::from_index(index).map(|pos| self.board.get(pos))
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_humans() -> GameConfig {
        GameConfig {
            x: Controller::Human,
            o: Controller::Human,
        }
    }

    #[test]
    fn test_marks_alternate_by_round() {
        let mut game = Game::with_seed(two_humans(), 0);
        assert_eq!(game.current_player(), Player::X);

        let event = game.play_round(Some(4)).unwrap();
        assert_eq!(event, RoundEvent::TurnChanged(Player::O));
        assert_eq!(game.round(), 2);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected_without_side_effects() {
        let mut game = Game::with_seed(two_humans(), 0);
        game.play_round(Some(4)).unwrap();

        let result = game.play_round(Some(4));
        assert!(matches!(result, Err(GameError::Occupied(_))));
        assert_eq!(game.round(), 2);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::with_seed(two_humans(), 0);
        let result = game.play_round(Some(9));
        assert_eq!(result, Err(GameError::OutOfBounds(9)));
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_omitted_index_for_human_mark_rejected() {
        let mut game = Game::with_seed(two_humans(), 0);
        let result = game.play_round(None);
        assert_eq!(result, Err(GameError::NoStrategy(Player::X)));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::with_seed(two_humans(), 0);
        // X: 0, 1, 2 wins the top row; O: 3, 4.
        for index in [0, 3, 1, 4] {
            game.play_round(Some(index)).unwrap();
        }
        let event = game.play_round(Some(2)).unwrap();

        assert_eq!(event, RoundEvent::Finished(Outcome::Winner(Player::X)));
        assert!(game.is_over());
        assert_eq!(game.play_round(Some(5)), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_ends_game() {
        let mut game = Game::with_seed(two_humans(), 0);
        // X O X / O X X / O X O
        for index in [0, 1, 2, 3, 4, 6, 5, 8] {
            game.play_round(Some(index)).unwrap();
        }
        let event = game.play_round(Some(7)).unwrap();
        assert_eq!(event, RoundEvent::Finished(Outcome::Draw));
        assert!(game.is_over());
    }

    #[test]
    fn test_cell_reflects_board() {
        let mut game = Game::with_seed(two_humans(), 0);
        game.play_round(Some(4)).unwrap();
        assert_eq!(game.cell(4), Some(Square::Occupied(Player::X)));
        assert_eq!(game.cell(0), Some(Square::Empty));
        assert_eq!(game.cell(9), None);
    }
}
