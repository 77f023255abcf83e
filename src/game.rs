//! Game state: board, players, whose turn it is, and turn history.
//!
//! [`Game`] is the surface the shell talks to. Input-level operations take the
//! raw tokens a human typed and return [`GameError`]s the shell can print and
//! re-prompt on; scripted players are driven by [`Game::play_scripted_turn`].

use std::fmt;

use fastrand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Cell, Color, Direction, WorkerId};
use crate::constants::N;
use crate::error::{GameError, Result};
use crate::heuristic::{self, Score};
use crate::history::History;
use crate::outcome::{self, Outcome};
use crate::players::{Player, PlayerType, random_build, random_move};
use crate::rules;

/// What happened in one turn, as shown to the players: `A,n,s`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    /// The worker that moved and built
    pub worker: WorkerId,
    /// Direction of the move
    pub moved: Direction,
    /// Direction of the build, from where the worker landed
    pub built: Direction,
}

impl fmt::Display for TurnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.worker, self.moved, self.built)
    }
}

/// One game between white and blue, with its undo/redo history.
pub struct Game {
    /// Live board
    board: Board,
    /// White and blue, indexed by [`Color::index`]
    players: [Player; 2],
    /// Player to move
    current: Color,
    /// Board snapshots, one per completed turn
    history: History,
    /// Random source for scripted players
    rng: Rng,
    /// Summary of the turn that produced the current board
    last_turn: Option<TurnSummary>,
}

impl Game {
    /// New game with an entropy-seeded random source.
    pub fn new(white: PlayerType, blue: PlayerType) -> Self {
        Self::with_rng(white, blue, Rng::new())
    }

    /// New game whose scripted players are reproducible.
    pub fn with_seed(white: PlayerType, blue: PlayerType, seed: u64) -> Self {
        Self::with_rng(white, blue, Rng::with_seed(seed))
    }

    /// New game drawing scripted choices from `rng`.
    pub fn with_rng(white: PlayerType, blue: PlayerType, rng: Rng) -> Self {
        let board = Board::new();
        Self {
            board,
            players: [
                Player::new(Color::White, white),
                Player::new(Color::Blue, blue),
            ],
            current: Color::White,
            history: History::new(board),
            rng,
            last_turn: None,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row-major cell view for rendering.
    pub fn cells(&self) -> [[Cell; N]; N] {
        self.board.cells()
    }

    /// The player playing `color`.
    pub fn player(&self, color: Color) -> Player {
        self.players[color.index()]
    }

    /// The player to move.
    pub fn current_player(&self) -> Player {
        self.player(self.current)
    }

    /// The player waiting for its turn.
    pub fn opponent(&self) -> Player {
        self.player(self.current.opponent())
    }

    /// 1 before the first move, +1 per completed turn.
    pub fn turn_number(&self) -> usize {
        self.history.cursor()
    }

    /// Summary of the turn that produced the current board, if any.
    pub fn last_turn(&self) -> Option<TurnSummary> {
        self.last_turn
    }

    /// Current outcome, with the player to move about to act.
    pub fn is_game_over(&self) -> Outcome {
        outcome::evaluate(&self.board, self.current)
    }

    /// True if `worker` has at least one legal move.
    pub fn can_worker_move(&self, worker: WorkerId) -> bool {
        rules::can_worker_move(&self.board, worker)
    }

    /// Height, centrality and distance features for `color`.
    pub fn score(&self, color: Color) -> Score {
        heuristic::score(&self.board, color)
    }

    /// True if there is an earlier turn to go back to.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if an undone turn can be replayed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // -------------------------------------------------------------------------
    // Input validation
    // -------------------------------------------------------------------------

    /// Resolve a typed worker symbol for the player to move.
    ///
    /// # Errors
    /// - [`GameError::InvalidWorker`] - not one of A, B, Y, Z
    /// - [`GameError::NotYourWorker`] - belongs to the opponent
    /// - [`GameError::WorkerCannotMove`] - has no legal move
    pub fn select_worker(&self, token: &str) -> Result<WorkerId> {
        let worker: WorkerId = token.parse()?;
        if !self.current_player().owns(worker) {
            return Err(GameError::NotYourWorker(worker));
        }
        if !self.can_worker_move(worker) {
            return Err(GameError::WorkerCannotMove(worker));
        }
        Ok(worker)
    }

    /// Check a move for `worker`, reporting the direction on failure.
    pub fn validate_move(&self, worker: WorkerId, dir: Direction) -> Result<Direction> {
        rules::validate_move(&self.board, worker, dir)
            .map_err(|reason| GameError::MoveBlocked { direction: dir, reason })
    }

    /// Check a build for `worker`, reporting the direction on failure.
    pub fn validate_build(&self, worker: WorkerId, dir: Direction) -> Result<Direction> {
        rules::validate_build(&self.board, worker, dir)
            .map_err(|reason| GameError::BuildBlocked { direction: dir, reason })
    }

    /// Parse a direction token and check it as a move for `worker`.
    pub fn parse_move(&self, worker: WorkerId, token: &str) -> Result<Direction> {
        self.validate_move(worker, token.parse()?)
    }

    /// Parse a direction token and check it as a build for `worker`.
    pub fn parse_build(&self, worker: WorkerId, token: &str) -> Result<Direction> {
        self.validate_build(worker, token.parse()?)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Move `worker`. Call only after [`Game::validate_move`] succeeded.
    pub fn apply_move(&mut self, worker: WorkerId, dir: Direction) {
        let to = rules::apply_move(&mut self.board, worker, dir);
        debug!(worker = %worker, direction = %dir, to = %to, "move");
    }

    /// Build next to `worker`. Call only after [`Game::validate_build`] succeeded.
    pub fn apply_build(&mut self, worker: WorkerId, dir: Direction) {
        let from = self.board.position(worker);
        let at = rules::apply_build(&mut self.board, dir, from);
        debug!(
            worker = %worker,
            direction = %dir,
            at = %at,
            height = self.board.height(at).unwrap_or_default(),
            "build"
        );
    }

    /// Close out a turn: remember its summary, pass play to the opponent and
    /// record the new position in history.
    pub fn finish_turn(&mut self, summary: TurnSummary) {
        self.last_turn = Some(summary);
        self.current = self.current.opponent();
        self.save_state();
    }

    /// Validate and play a whole turn for the player to move. The board is
    /// untouched unless both the move and the build are legal.
    pub fn play_turn(
        &mut self,
        worker: WorkerId,
        moved: Direction,
        built: Direction,
    ) -> Result<TurnSummary> {
        if !self.current_player().owns(worker) {
            return Err(GameError::NotYourWorker(worker));
        }
        self.validate_move(worker, moved)?;
        let mut trial = self.board;
        rules::apply_move(&mut trial, worker, moved);
        rules::validate_build(&trial, worker, built)
            .map_err(|reason| GameError::BuildBlocked { direction: built, reason })?;

        self.apply_move(worker, moved);
        self.apply_build(worker, built);
        let summary = TurnSummary { worker, moved, built };
        self.finish_turn(summary);
        Ok(summary)
    }

    /// Let a random or heuristic player take its turn.
    ///
    /// # Errors
    /// - [`GameError::NotScripted`] - the player to move is human
    /// - [`GameError::NoLegalTurn`] - the player has nothing legal to do,
    ///   which cannot happen while the game is in progress
    pub fn play_scripted_turn(&mut self) -> Result<TurnSummary> {
        let player = self.current_player();
        let choice = match player.kind {
            PlayerType::Human => return Err(GameError::NotScripted(player.color)),
            PlayerType::Random => random_move(&self.board, player.color, &mut self.rng),
            PlayerType::Heuristic => heuristic::best_move(&self.board, player.color, &mut self.rng),
        };
        let (worker, moved) = choice.ok_or(GameError::NoLegalTurn(player.color))?;

        // The build is picked from where the worker lands; the live board is
        // only touched once both halves are known.
        let mut trial = self.board;
        rules::apply_move(&mut trial, worker, moved);
        let built = random_build(&trial, worker, &mut self.rng)
            .ok_or(GameError::NoLegalTurn(player.color))?;

        self.apply_move(worker, moved);
        self.apply_build(worker, built);

        let summary = TurnSummary { worker, moved, built };
        self.finish_turn(summary);
        Ok(summary)
    }

    // -------------------------------------------------------------------------
    // History
    // -------------------------------------------------------------------------

    /// Record the current board as the latest turn.
    pub fn save_state(&mut self) {
        self.history.save(&self.board);
    }

    /// Go back one turn. Returns false if already at the start.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(board) => {
                self.restore(board);
                info!(turn = self.turn_number(), "undo");
                true
            }
            None => false,
        }
    }

    /// Go forward one turn. Returns false if already at the latest turn.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(board) => {
                self.restore(board);
                info!(turn = self.turn_number(), "redo");
                true
            }
            None => false,
        }
    }

    /// Swap in a snapshot, hand play to the other side and clear the last
    /// turn summary.
    fn restore(&mut self, board: Board) {
        self.board = board;
        self.current = self.current.opponent();
        self.last_turn = None;
    }

    /// Back to the starting layout with white to move. Player types and the
    /// random source are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = Color::White;
        self.history = History::new(self.board);
        self.last_turn = None;
        info!("reset");
    }
}
