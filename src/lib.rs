//! Tic-tac-toe decision engine.
//!
//! The crate covers the game core only: the board, the win/draw rules,
//! the move selectors (uniform random and exhaustive minimax), and the
//! turn engine that drives them. Rendering, input handling, and message
//! display are external collaborators that call in through
//! [`Game::play_round`] and read back through [`Game::cell`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameConfig, RoundEvent};
//!
//! // Human X against the unbeatable computer O.
//! let mut game = Game::new(GameConfig::default());
//!
//! // The human plays the center...
//! let event = game.play_round(Some(4))?;
//! assert!(matches!(event, RoundEvent::TurnChanged(_)));
//!
//! // ...and the computer answers on its own.
//! game.play_round(None)?;
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod rules;
mod strategy;
mod types;

pub use action::{GameError, Move};
pub use engine::{Game, GameConfig, Outcome, RoundEvent};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use strategy::{Controller, Strategy};
pub use types::{Board, Player, Square};
