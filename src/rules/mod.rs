//! Win and draw rules.
//!
//! These predicates are pure and stateless. The turn engine and the
//! minimax search call the same functions, so a position is judged
//! identically after a human move and inside the search.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};
