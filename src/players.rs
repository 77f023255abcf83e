//! Players and the random scripted strategy.
//!
//! Who supplies the next move is decided by a single `match` on
//! [`PlayerType`] in [`crate::game::Game::play_scripted_turn`] and in the shell.

use std::fmt;

use clap::ValueEnum;
use fastrand::Rng;

use crate::board::{Board, Color, Direction, WorkerId};
use crate::rules::{can_worker_move, legal_builds, legal_moves};

/// Who supplies a color's moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PlayerType {
    /// Moves are read from the input prompt
    #[default]
    Human,
    /// Uniformly random legal moves and builds
    Random,
    /// Greedy one-ply scoring, random legal build
    Heuristic,
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerType::Human => "human",
            PlayerType::Random => "random",
            PlayerType::Heuristic => "heuristic",
        })
    }
}

/// One side of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Color played
    pub color: Color,
    /// Where the moves come from
    pub kind: PlayerType,
}

impl Player {
    /// Player of `kind` playing `color`.
    pub fn new(color: Color, kind: PlayerType) -> Self {
        Self { color, kind }
    }

    /// This player's two workers.
    pub fn workers(&self) -> [WorkerId; 2] {
        self.color.workers()
    }

    /// True if `worker` belongs to this player.
    pub fn owns(&self, worker: WorkerId) -> bool {
        worker.owner() == self.color
    }

    /// Worker symbols as shown in the turn header, e.g. `AB`.
    pub fn worker_symbols(&self) -> String {
        self.workers().iter().map(|w| w.symbol()).collect()
    }
}

fn pick<T: Copy>(items: &[T], rng: &mut Rng) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.usize(..items.len())])
    }
}

/// A uniformly random worker that can move, then a uniformly random legal
/// direction for it.
pub fn random_move(board: &Board, player: Color, rng: &mut Rng) -> Option<(WorkerId, Direction)> {
    let movable: Vec<WorkerId> = player
        .workers()
        .into_iter()
        .filter(|&w| can_worker_move(board, w))
        .collect();
    let worker = pick(&movable, rng)?;
    let dir = pick(&legal_moves(board, worker), rng)?;
    Some((worker, dir))
}

/// A uniformly random legal build direction for `worker`.
pub fn random_build(board: &Board, worker: WorkerId, rng: &mut Rng) -> Option<Direction> {
    pick(&legal_builds(board, worker), rng)
}
