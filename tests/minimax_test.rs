//! Adversarial properties of the minimax selector.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe_engine::{
    Board, Controller, Game, GameConfig, Outcome, Player, Position, RoundEvent, Strategy,
};

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(index, player) in marks {
        let pos = Position::from_index(index).expect("index in range");
        board.place(pos, player).expect("empty square");
    }
    board
}

/// Drives a computer-vs-computer game to its end.
fn play_out(config: GameConfig, seed: u64) -> Outcome {
    let mut game = Game::with_seed(config, seed);
    loop {
        match game.play_round(None).expect("computer move") {
            RoundEvent::TurnChanged(_) => continue,
            RoundEvent::Finished(outcome) => return outcome,
        }
    }
}

#[test]
fn test_blocks_pending_win() {
    // X threatens the top row; O must occupy 2.
    let mut board = board_with(&[(0, Player::X), (1, Player::X), (4, Player::O)]);
    let mut rng = StdRng::seed_from_u64(0);

    let pos = Strategy::Minimax
        .choose(&mut board, Player::O, &mut rng)
        .expect("non-terminal board");
    assert_eq!(pos.to_index(), 2);
}

#[test]
fn test_double_threat_scenario_selects_two() {
    // X at 0,1 and O at 3,4: winning at 5 and blocking at 2 both score
    // +10, and the ascending-order tie-break lands on 2.
    let mut board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (3, Player::O),
        (4, Player::O),
    ]);
    let mut rng = StdRng::seed_from_u64(0);

    let pos = Strategy::Minimax
        .choose(&mut board, Player::O, &mut rng)
        .expect("non-terminal board");
    assert_eq!(pos.to_index(), 2);
}

#[test]
fn test_empty_board_opening() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0);

    let pos = Strategy::Minimax
        .choose(&mut board, Player::O, &mut rng)
        .expect("non-terminal board");
    assert!([0, 2, 4, 6, 8].contains(&pos.to_index()));
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut board = board_with(&[(0, Player::X), (4, Player::O), (1, Player::X)]);
    let before = board.clone();
    let mut rng = StdRng::seed_from_u64(0);

    Strategy::Minimax.choose(&mut board, Player::O, &mut rng);
    assert_eq!(board, before);
}

#[test]
fn test_minimax_vs_minimax_is_a_draw() {
    let config = GameConfig {
        x: Controller::Computer(Strategy::Minimax),
        o: Controller::Computer(Strategy::Minimax),
    };
    assert_eq!(play_out(config, 0), Outcome::Draw);
}

#[test]
fn test_minimax_o_never_loses_to_random_x() {
    let config = GameConfig {
        x: Controller::Computer(Strategy::Random),
        o: Controller::Computer(Strategy::Minimax),
    };

    for seed in 0..200 {
        let outcome = play_out(config, seed);
        assert_ne!(
            outcome,
            Outcome::Winner(Player::X),
            "random X beat minimax O with seed {seed}"
        );
    }
}

#[test]
fn test_minimax_x_never_loses_to_random_o() {
    let config = GameConfig {
        x: Controller::Computer(Strategy::Minimax),
        o: Controller::Computer(Strategy::Random),
    };

    for seed in 0..200 {
        let outcome = play_out(config, seed);
        assert_ne!(
            outcome,
            Outcome::Winner(Player::O),
            "random O beat minimax X with seed {seed}"
        );
    }
}

#[test]
fn test_random_vs_random_always_terminates_legally() {
    let config = GameConfig {
        x: Controller::Computer(Strategy::Random),
        o: Controller::Computer(Strategy::Random),
    };

    for seed in 0..50 {
        // play_out panics on any illegal move, so reaching an outcome
        // is the assertion.
        let _ = play_out(config, seed);
    }
}
