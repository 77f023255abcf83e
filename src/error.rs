//! Error types for move and build legality and for shell input.
//!
//! Every variant here is recoverable: the caller re-prompts, retries with a
//! different candidate, or skips it. Anything unexpected travels as an
//! `anyhow::Error` instead.

use thiserror::Error;

use crate::board::{Color, Direction, WorkerId};

/// Why a worker cannot move in a given direction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("target is off the board")]
    OutOfBounds,
    #[error("target is occupied")]
    Occupied,
    #[error("target is capped by a dome")]
    Blocked,
    #[error("target is more than one level higher")]
    TooHigh,
}

/// Why a worker cannot build in a given direction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("target is off the board")]
    OutOfBounds,
    #[error("target is occupied")]
    Occupied,
    #[error("target is capped by a dome")]
    Blocked,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not a valid direction")]
    InvalidDirection(String),

    #[error("Not a valid worker")]
    InvalidWorker(String),

    #[error("That is not your worker")]
    NotYourWorker(WorkerId),

    #[error("That worker cannot move")]
    WorkerCannotMove(WorkerId),

    #[error("Cannot move {direction}")]
    MoveBlocked {
        direction: Direction,
        reason: MoveError,
    },

    #[error("Cannot build {direction}")]
    BuildBlocked {
        direction: Direction,
        reason: BuildError,
    },

    #[error("{0} is not a scripted player")]
    NotScripted(Color),

    #[error("{0} has no legal move and build")]
    NoLegalTurn(Color),
}

pub type Result<T> = std::result::Result<T, GameError>;
