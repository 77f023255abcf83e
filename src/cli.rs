//! Interactive text shell.
//!
//! Reads prompts' answers line by line and writes the board, turn headers and
//! summaries. Generic over the reader and writer so that a whole session can
//! be scripted in tests.
//!
//! ## Session
//!
//! ```text
//! +--+--+--+--+--+
//! |0 |0 |0 |0 |0 |
//! ...
//! Turn: 1, white (AB)
//! Select a worker to move
//! ```
//!
//! With undo/redo enabled each turn starts with `undo, redo, or next`.
//! End of input ends the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::error::GameError;
use crate::game::{Game, TurnSummary};
use crate::players::PlayerType;

const DIRECTIONS_HINT: &str = "(n, ne, e, se, s, sw, w, nw)";

/// Shell switches, both off by default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Offer `undo, redo, or next` before every turn
    pub undo_redo: bool,
    /// Append the (height, center, distance) triple to headers and summaries
    pub show_score: bool,
}

/// Text front end driving one [`Game`] from `R` and printing to `W`.
pub struct Shell<R, W> {
    game: Game,
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Shell over `game`, reading answers from `input`.
    pub fn new(game: Game, input: R, output: W, settings: Settings) -> Self {
        Self {
            game,
            input,
            output,
            settings,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the shell and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run games until the players decline a rematch or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            while !self.game.is_game_over().is_over() {
                self.print_board()?;
                self.print_turn_info()?;

                if !self.settings.undo_redo {
                    if !self.play_turn()? {
                        return Ok(());
                    }
                    continue;
                }

                let Some(command) = self.prompt("undo, redo, or next")? else {
                    return Ok(());
                };
                match command.to_ascii_lowercase().as_str() {
                    "undo" => {
                        self.game.undo();
                    }
                    "redo" => {
                        self.game.redo();
                    }
                    "next" => {
                        if !self.play_turn()? {
                            return Ok(());
                        }
                    }
                    _ => {}
                }
            }

            let outcome = self.game.is_game_over();
            info!(%outcome, turn = self.game.turn_number(), "game over");
            self.print_board()?;
            self.print_turn_info()?;
            writeln!(self.output, "{outcome}")?;

            let Some(answer) = self.prompt("Play again?")? else {
                return Ok(());
            };
            if !answer.eq_ignore_ascii_case("yes") {
                return Ok(());
            }
            self.game.reset();
        }
    }

    /// Play one turn for whoever is to move. Returns false if input ran out.
    fn play_turn(&mut self) -> Result<bool> {
        let player = self.game.current_player();
        let summary = match player.kind {
            PlayerType::Human => match self.human_turn()? {
                Some(summary) => summary,
                None => return Ok(false),
            },
            PlayerType::Random | PlayerType::Heuristic => self
                .game
                .play_scripted_turn()
                .with_context(|| format!("{} {} player failed to move", player.kind, player.color))?,
        };
        debug!(turn = self.game.turn_number(), %summary, "turn played");
        self.print_summary(summary)?;
        Ok(true)
    }

    fn human_turn(&mut self) -> Result<Option<TurnSummary>> {
        let Some(worker) = self.ask("Select a worker to move", |g, t| g.select_worker(t))? else {
            return Ok(None);
        };

        let question = format!("Select a direction to move {DIRECTIONS_HINT}");
        let Some(moved) = self.ask(&question, |g, t| g.parse_move(worker, t))? else {
            return Ok(None);
        };
        self.game.apply_move(worker, moved);

        let question = format!("Select a direction to build {DIRECTIONS_HINT}");
        let Some(built) = self.ask(&question, |g, t| g.parse_build(worker, t))? else {
            return Ok(None);
        };
        self.game.apply_build(worker, built);

        let summary = TurnSummary {
            worker,
            moved,
            built,
        };
        self.game.finish_turn(summary);
        Ok(Some(summary))
    }

    /// Prompt until `parse` accepts the answer, printing each rejection.
    fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&Game, &str) -> std::result::Result<T, GameError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match parse(&self.game, &answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Print `question` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_board(&mut self) -> Result<()> {
        write!(self.output, "{}", self.game.board())?;
        Ok(())
    }

    fn print_turn_info(&mut self) -> Result<()> {
        let player = self.game.current_player();
        write!(
            self.output,
            "Turn: {}, {} ({})",
            self.game.turn_number(),
            player.color,
            player.worker_symbols()
        )?;
        if self.settings.show_score {
            write!(self.output, ", {}", self.game.score(player.color))?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_summary(&mut self, summary: TurnSummary) -> Result<()> {
        write!(self.output, "{summary}")?;
        if self.settings.show_score {
            let mover = summary.worker.owner();
            write!(self.output, " {}", self.game.score(mover))?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shell(input: &str, settings: Settings) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        let game = Game::with_seed(PlayerType::Human, PlayerType::Human, 0);
        Shell::new(game, Cursor::new(input.as_bytes().to_vec()), Vec::new(), settings)
    }

    fn output(shell: Shell<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_empty_input_ends_session() {
        let mut sh = shell("", Settings::default());
        sh.run().unwrap();
        let out = output(sh);
        assert!(out.contains("Turn: 1, white (AB)"));
        assert!(out.contains("Select a worker to move"));
    }

    #[test]
    fn test_prompt_retries_on_error() {
        let mut sh = shell("Q\nY\nA\nup\nn\nn\nw\n", Settings::default());
        sh.run().unwrap();
        assert_eq!(sh.game().turn_number(), 2);
        let out = output(sh);
        assert!(out.contains("Not a valid worker"));
        assert!(out.contains("That is not your worker"));
        assert!(out.contains("Not a valid direction"));
        assert!(out.contains("Cannot build n"));
        assert!(out.contains("A,n,w"));
        assert!(out.contains("Turn: 2, blue (YZ)"));
    }

    #[test]
    fn test_score_display() {
        let settings = Settings {
            undo_redo: false,
            show_score: true,
        };
        let mut sh = shell("", settings);
        sh.run().unwrap();
        assert!(output(sh).contains("Turn: 1, white (AB), (0, 2, 4)"));
    }

    #[test]
    fn test_undo_redo_commands() {
        let settings = Settings {
            undo_redo: true,
            show_score: false,
        };
        let mut sh = shell("next\nA\nn\nw\nundo\nredo\nundo\nbogus\n", settings);
        sh.run().unwrap();
        assert_eq!(sh.game().turn_number(), 1);
        assert!(sh.game().can_redo());
        let out = output(sh);
        assert!(out.contains("undo, redo, or next"));
        assert_eq!(out.matches("Turn: 2, blue (YZ)").count(), 2);
    }
}
