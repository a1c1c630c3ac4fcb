//! Integration tests for connect-four
//!
//! Full games played through the public engine API and through the console
//! front end with scripted input.

use std::io::Cursor;

use connect_four::board::Board;
use connect_four::config::GameConfig;
use connect_four::console::Console;
use connect_four::error::GameError;
use connect_four::game::{GameEngine, GameState};
use connect_four::player::Disk;
use connect_four::win::{Orientation, is_win, transpose, winning_line};

// =============================================================================
// Helper functions
// =============================================================================

/// A 42-move game on the default board, alternating from the first player,
/// that fills every cell without ever forming four in a row.
const DRAW_SEQUENCE: [usize; 42] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 4, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 5,
];

fn new_game(first: Disk) -> GameEngine {
    GameEngine::with_first(GameConfig::default(), first).unwrap()
}

/// Run a console session over `input` and return everything it printed.
fn play_session(engine: &mut GameEngine, input: &str) -> String {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    console.run(engine).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn lines(columns: &[usize]) -> String {
    columns.iter().map(|c| format!("{c}\n")).collect()
}

// =============================================================================
// Board properties
// =============================================================================

#[test]
fn test_place_adds_exactly_one_disk() {
    let mut board = Board::new(7, 6).unwrap();
    for column in 0..7 {
        for _ in 0..column % 6 {
            board.place(Disk::Blue, column).unwrap();
        }
    }

    for column in 0..7 {
        assert!(!board.is_column_full(column));
        let before = board.clone();
        board.place(Disk::Red, column).unwrap();
        assert_eq!(board.column_count(column), before.column_count(column) + 1);
        for other in (0..7).filter(|&c| c != column) {
            assert_eq!(board.cells()[other], before.cells()[other]);
        }
    }
}

#[test]
fn test_failed_place_leaves_board_unchanged() {
    let mut board = Board::new(7, 6).unwrap();
    for _ in 0..6 {
        board.place(Disk::Red, 6).unwrap();
    }
    let before = board.clone();

    assert!(board.place(Disk::Blue, 6).is_err());
    assert!(board.place(Disk::Blue, 7).is_err());
    assert!(board.place(Disk::Blue, 100).is_err());
    assert_eq!(board, before);
}

#[test]
fn test_reset_restores_empty_board() {
    let mut board = Board::new(5, 4).unwrap();
    for column in 0..5 {
        for _ in 0..4 {
            board.place(Disk::Red, column).unwrap();
        }
    }
    assert!(board.is_full());

    board.reset();
    assert_eq!(board, Board::new(5, 4).unwrap());
    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 4);
}

#[test]
fn test_is_full_iff_every_column_full() {
    let mut board = Board::new(7, 6).unwrap();
    for column in 0..6 {
        for _ in 0..6 {
            board.place(Disk::Red, column).unwrap();
        }
    }
    for _ in 0..5 {
        board.place(Disk::Blue, 6).unwrap();
    }
    assert!(!board.is_full());

    board.place(Disk::Blue, 6).unwrap();
    assert!((0..7).all(|c| board.is_column_full(c)));
    assert!(board.is_full());
}

// =============================================================================
// Win detection through the board
// =============================================================================

#[test]
fn test_vertical_and_transposed_runs() {
    let mut board = Board::new(7, 6).unwrap();
    for _ in 0..4 {
        board.place(Disk::Red, 0).unwrap();
    }
    assert_eq!(
        winning_line(board.cells(), Disk::Red),
        Some(Orientation::Vertical)
    );
    assert_eq!(
        winning_line(&transpose(board.cells()), Disk::Red),
        Some(Orientation::Horizontal)
    );
    assert!(!is_win(board.cells(), Disk::Blue));
}

#[test]
fn test_diagonal_built_by_gravity() {
    let mut board = Board::new(7, 6).unwrap();
    // Staircase rising to the right: bottom of column 0 to row 2 of column 3.
    for (column, fill) in [(1, 1), (2, 2), (3, 3)] {
        for _ in 0..fill {
            board.place(Disk::Blue, column).unwrap();
        }
    }
    for column in 0..4 {
        board.place(Disk::Red, column).unwrap();
    }
    assert_eq!(
        winning_line(board.cells(), Disk::Red),
        Some(Orientation::AntiDiagonal)
    );
}

#[test]
fn test_five_in_a_row_is_a_win() {
    let mut board = Board::new(7, 6).unwrap();
    for _ in 0..5 {
        board.place(Disk::Blue, 3).unwrap();
    }
    assert!(is_win(board.cells(), Disk::Blue));
}

// =============================================================================
// End-to-end games
// =============================================================================

#[test]
fn test_four_drops_in_one_column_wins() {
    let mut game = new_game(Disk::Red);

    // Red keeps dropping into column 0 while Blue plays elsewhere.
    for turn in 0..3 {
        assert_eq!(game.play(0), Ok(GameState::InProgress));
        assert_eq!(game.play(turn + 1), Ok(GameState::InProgress));
    }
    assert_eq!(game.play(0), Ok(GameState::Won(Disk::Red)));
    assert_eq!(game.winner().map(|p| p.name()), Some("Player1"));

    let board = game.board().clone();
    assert_eq!(game.play(5), Err(GameError::GameOver));
    assert_eq!(game.board(), &board);

    game.replay(true).unwrap();
    assert_eq!(game.board(), &Board::new(7, 6).unwrap());
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    for first in [Disk::Red, Disk::Blue] {
        let mut game = new_game(first);
        let (last, rest) = DRAW_SEQUENCE.split_last().unwrap();
        for &column in rest {
            assert_eq!(game.play(column), Ok(GameState::InProgress));
        }
        assert_eq!(game.play(*last), Ok(GameState::Draw));
        assert!(game.board().is_full());
        assert!(game.winner().is_none());
    }
}

#[test]
fn test_turns_alternate() {
    let mut game = new_game(Disk::Blue);
    let mut expected = Disk::Blue;
    for column in [3, 3, 2, 4, 1, 5] {
        assert_eq!(game.current_player().disk(), expected);
        game.play(column).unwrap();
        expected = expected.other();
    }
}

#[test]
fn test_named_players() {
    let config = GameConfig {
        player1: "Ann".to_string(),
        player2: "Bob".to_string(),
        ..GameConfig::default()
    };
    let game = GameEngine::with_first(config, Disk::Blue).unwrap();
    assert_eq!(game.current_player().name(), "Bob");
    assert_eq!(game.player(Disk::Red).name(), "Ann");
}

// =============================================================================
// Console sessions
// =============================================================================

#[test]
fn test_console_win_then_quit() {
    let mut game = new_game(Disk::Red);
    let input = lines(&[0, 1, 0, 1, 0, 1, 0]) + "n\n";
    let out = play_session(&mut game, &input);

    assert_eq!(game.state(), GameState::Terminated);
    assert!(out.contains("Player1's("));
    assert!(out.contains("Player1 has won the game!"));
    assert!(!out.contains("draw"));
    assert!(out.contains("Would you like to play again? (y/n)"));
}

#[test]
fn test_console_invalid_input_reprompts() {
    let mut game = new_game(Disk::Blue);
    let input = "9\nfoo\n".to_string() + &lines(&[0, 1, 0, 1, 0, 1, 0]) + "n\n";
    let out = play_session(&mut game, &input);

    assert_eq!(out.matches("Invalid input").count(), 2);
    assert!(out.contains("Player2 has won the game!"));
}

#[test]
fn test_console_draw() {
    let mut game = new_game(Disk::Red);
    let input = lines(&DRAW_SEQUENCE) + "n\n";
    let out = play_session(&mut game, &input);

    assert!(out.contains("The game ended in a draw"));
    assert!(!out.contains("has won the game!"));
}

#[test]
fn test_console_replay() {
    let mut game = new_game(Disk::Red);
    // Whoever starts the second round wins it the same way.
    let round = lines(&[0, 1, 0, 1, 0, 1, 0]);
    let input = round.clone() + "maybe\ny\n" + &round + "N\n";
    let out = play_session(&mut game, &input);

    assert_eq!(out.matches("has won the game!").count(), 2);
    assert_eq!(out.matches("Would you like to play again?").count(), 2);
    assert_eq!(game.state(), GameState::Terminated);
}

#[test]
fn test_console_input_closed_mid_game() {
    let mut game = new_game(Disk::Red);
    let out = play_session(&mut game, "3\n");

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.board().column_count(3), 1);
    assert!(out.contains("Player2's("));
}
