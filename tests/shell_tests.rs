//! Whole sessions through the text shell, with scripted input.

use std::io::Cursor;

use santorini_rust::cli::{Settings, Shell};
use santorini_rust::game::Game;
use santorini_rust::players::PlayerType;

fn run_session(game: Game, input: &str, settings: Settings) -> String {
    let mut shell = Shell::new(game, Cursor::new(input.to_string()), Vec::new(), settings);
    shell.run().expect("session failed");
    String::from_utf8(shell.into_output()).expect("utf-8 output")
}

#[test]
fn test_scripted_game_runs_to_completion() {
    let game = Game::with_seed(PlayerType::Random, PlayerType::Heuristic, 17);
    let out = run_session(game, "no\n", Settings::default());

    assert!(out.contains("Turn: 1, white (AB)"));
    assert_eq!(out.matches("has won").count(), 1);
    assert!(out.contains("Play again?"));
    assert!(!out.contains("Select a worker"));
}

#[test]
fn test_play_again_resets() {
    let game = Game::with_seed(PlayerType::Random, PlayerType::Random, 5);
    let out = run_session(game, "yes\nno\n", Settings::default());

    assert_eq!(out.matches("has won").count(), 2);
    assert_eq!(out.matches("Play again?").count(), 2);
    // The second game starts from turn 1 again.
    assert_eq!(out.matches("Turn: 1, white (AB)").count(), 2);
}

#[test]
fn test_human_against_heuristic() {
    let game = Game::with_seed(PlayerType::Human, PlayerType::Heuristic, 3);
    let settings = Settings {
        undo_redo: false,
        show_score: true,
    };
    let out = run_session(game, "b\ns\nn\n", settings);

    // White's turn, then blue answers on its own, then white is asked again.
    assert!(out.contains("B,s,n ("));
    assert!(out.contains("Turn: 2, blue (YZ), ("));
    assert!(out.contains("Turn: 3, white (AB), ("));
    assert_eq!(out.matches("Select a worker to move").count(), 2);
}

#[test]
fn test_undo_after_scripted_turn() {
    let game = Game::with_seed(PlayerType::Human, PlayerType::Random, 8);
    let settings = Settings {
        undo_redo: true,
        show_score: false,
    };
    let mut shell = Shell::new(
        game,
        Cursor::new("next\na\nn\nw\nnext\nundo\nundo\n".to_string()),
        Vec::new(),
        settings,
    );
    shell.run().expect("session failed");
    assert_eq!(shell.game().turn_number(), 1);
    assert!(shell.game().can_redo());
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("A,n,w"));
    assert!(out.contains("Turn: 3, white (AB)"));
}
