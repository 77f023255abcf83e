//! Santorini-Rust: rules engine for a two-player tower-building game.
//!
//! Two players each move one of their two workers per turn on a 5x5 board,
//! then build one level next to where the worker landed. Standing on level 3
//! wins; having no legal move and build loses.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, tiers, heuristic weights
//! - [`board`] - Grid heights, worker positions, directions
//! - [`rules`] - Move/build legality and application
//! - [`outcome`] - Win and immobilization detection
//! - [`heuristic`] - One-ply scoring for the heuristic player
//! - [`players`] - Player types and the random player
//! - [`history`] - Undo/redo snapshots
//! - [`game`] - Game state facade used by the shell
//! - [`cli`] - Interactive text shell
//!
//! ## Example
//!
//! ```
//! use santorini_rust::board::{Direction, WorkerId};
//! use santorini_rust::game::Game;
//! use santorini_rust::players::PlayerType;
//!
//! let mut game = Game::with_seed(PlayerType::Human, PlayerType::Heuristic, 42);
//!
//! // White moves A north and builds to the west.
//! game.play_turn(WorkerId::A, Direction::N, Direction::W).unwrap();
//!
//! // Blue answers with the heuristic player.
//! let summary = game.play_scripted_turn().unwrap();
//! println!("{summary}");
//! assert_eq!(game.turn_number(), 3);
//! ```

pub mod board;
pub mod cli;
pub mod constants;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod history;
pub mod outcome;
pub mod players;
pub mod rules;
