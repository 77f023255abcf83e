//! One-ply heuristic move selection for the scripted "heuristic" player.
//!
//! Every legal (worker, direction) move is scored on a trial copy of the
//! board with
//!
//! ```text
//! score = 3 * height + 2 * center + 1 * distance
//! ```
//!
//! - `height`: sum of the player's worker heights
//! - `center`: 2 for the center cell, 0 on the edge, 1 otherwise, summed
//! - `distance`: 8 minus, over opponent workers, the Chebyshev distance to the
//!   nearest own worker
//!
//! A move that lands on level 3 wins outright and has its score multiplied
//! by 10. Equal scores are settled by a fair coin flip against the current
//! best, once per comparison.

use std::fmt;

use fastrand::Rng;
use tracing::trace;

use crate::board::{Board, Color, Coord, Direction, WorkerId};
use crate::constants::{
    CENTER, CENTER_POINTS, CENTER_WEIGHT, DISTANCE_BASE, DISTANCE_WEIGHT, EDGE_POINTS,
    HEIGHT_WEIGHT, INNER_POINTS, WIN_HEIGHT, WIN_MULTIPLIER,
};
use crate::rules::{apply_move, validate_move};

/// The three feature values behind a position's score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    /// Summed worker heights
    pub height: i32,
    /// Summed centrality points
    pub center: i32,
    /// Proximity to the opponent's workers
    pub distance: i32,
}

impl Score {
    /// Weighted sum of the three features.
    pub fn total(&self) -> i32 {
        HEIGHT_WEIGHT * self.height + CENTER_WEIGHT * self.center + DISTANCE_WEIGHT * self.distance
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.center, self.distance)
    }
}

/// Sum of the heights under `player`'s workers.
pub fn height_score(board: &Board, player: Color) -> i32 {
    player
        .workers()
        .into_iter()
        .map(|w| board.worker_height(w) as i32)
        .sum()
}

fn centrality(at: Coord) -> i32 {
    if at == Coord::from(CENTER) {
        CENTER_POINTS
    } else if at.on_edge() {
        EDGE_POINTS
    } else {
        INNER_POINTS
    }
}

/// Centrality points of `player`'s workers: 2 center, 1 inner, 0 edge.
pub fn center_score(board: &Board, player: Color) -> i32 {
    player
        .workers()
        .into_iter()
        .map(|w| centrality(board.position(w)))
        .sum()
}

/// `8` minus, per opponent worker, the distance to `player`'s nearest worker.
pub fn distance_score(board: &Board, player: Color) -> i32 {
    let own = player.workers().map(|w| board.position(w));
    let total: i32 = player
        .opponent()
        .workers()
        .into_iter()
        .map(|opp| {
            let at = board.position(opp);
            own.iter().map(|&mine| mine.chebyshev(at)).min().unwrap_or(0)
        })
        .sum();
    DISTANCE_BASE - total
}

/// Feature triple for `player` on `board`.
pub fn score(board: &Board, player: Color) -> Score {
    Score {
        height: height_score(board, player),
        center: center_score(board, player),
        distance: distance_score(board, player),
    }
}

/// Score of moving `worker` in `dir`, or `None` if the move is illegal.
/// The board is not modified.
pub fn move_score(board: &Board, worker: WorkerId, dir: Direction) -> Option<i32> {
    validate_move(board, worker, dir).ok()?;
    let mut trial = *board;
    apply_move(&mut trial, worker, dir);

    let mut total = score(&trial, worker.owner()).total();
    if trial.worker_height(worker) == WIN_HEIGHT {
        total *= WIN_MULTIPLIER;
    }
    Some(total)
}

/// Pick the best move for `player`, or `None` if none of its workers can move.
pub fn best_move(board: &Board, player: Color, rng: &mut Rng) -> Option<(WorkerId, Direction)> {
    let mut best: Option<(i32, WorkerId, Direction)> = None;

    for worker in player.workers() {
        for dir in Direction::ALL {
            let Some(s) = move_score(board, worker, dir) else {
                continue;
            };
            trace!(worker = %worker, direction = %dir, score = s, "heuristic candidate");
            best = match best {
                None => Some((s, worker, dir)),
                Some((b, ..)) if s > b => Some((s, worker, dir)),
                Some((b, ..)) if s == b && rng.bool() => Some((s, worker, dir)),
                keep => keep,
            };
        }
    }

    best.map(|(_, worker, dir)| (worker, dir))
}
