//! Win and loss detection, run after every completed half-turn.

use std::fmt;

use crate::board::{Board, Color};
use crate::constants::WIN_HEIGHT;
use crate::rules::has_legal_turn;

/// State of a game after a half-turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nobody has won yet.
    InProgress,
    /// The player has a worker standing on level 3.
    WonByHeight(Color),
    /// The opponent of this player had no legal move and build.
    WonByImmobilization(Color),
}

impl Outcome {
    /// The winning color, if the game is over.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::InProgress => None,
            Outcome::WonByHeight(c) | Outcome::WonByImmobilization(c) => Some(c),
        }
    }

    /// True for any finished game.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(c) => write!(f, "{c} has won"),
            None => f.write_str("in progress"),
        }
    }
}

/// True if any of `player`'s workers stands on the winning level.
pub fn reached_top(board: &Board, player: Color) -> bool {
    player
        .workers()
        .into_iter()
        .any(|w| board.worker_height(w) == WIN_HEIGHT)
}

/// True if no worker of `player` has a legal move followed by a legal build.
pub fn is_immobilized(board: &Board, player: Color) -> bool {
    !player
        .workers()
        .into_iter()
        .any(|w| has_legal_turn(board, w))
}

/// Decide the game state with `to_move` about to act.
///
/// Height wins are checked first, for the player who just acted and then
/// for `to_move`. Immobilization is only considered when nobody has won.
pub fn evaluate(board: &Board, to_move: Color) -> Outcome {
    let just_acted = to_move.opponent();
    if reached_top(board, just_acted) {
        return Outcome::WonByHeight(just_acted);
    }
    if reached_top(board, to_move) {
        return Outcome::WonByHeight(to_move);
    }
    if is_immobilized(board, to_move) {
        return Outcome::WonByImmobilization(just_acted);
    }
    Outcome::InProgress
}
