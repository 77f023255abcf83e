//! Santorini-Rust: play on the command line.
//!
//! ## Usage
//!
//! - `santorini-rust` - Human vs human
//! - `santorini-rust human heuristic` - Human (white) vs heuristic (blue)
//! - `santorini-rust random random off on` - Watch two random players, with scores
//! - `santorini-rust human human on` - Enable undo/redo between turns

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use santorini_rust::cli::{Settings, Shell};
use santorini_rust::game::Game;
use santorini_rust::players::PlayerType;

const DEFAULT_FILTER: &str = "santorini_rust=debug";

/// Santorini-Rust: a tower-building strategy game
#[derive(Parser)]
#[command(name = "santorini-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Who plays white (workers A and B, moves first)
    #[arg(value_enum, default_value_t = PlayerType::Human)]
    white: PlayerType,

    /// Who plays blue (workers Y and Z)
    #[arg(value_enum, default_value_t = PlayerType::Human)]
    blue: PlayerType,

    /// Offer undo/redo before every turn
    #[arg(value_enum, default_value_t = Toggle::Off)]
    undo_redo: Toggle,

    /// Show (height, center, distance) scores
    #[arg(value_enum, default_value_t = Toggle::Off)]
    score: Toggle,

    /// Seed for the scripted players' random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the debug log
    #[arg(long, default_value = "santorini.log")]
    log_file: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn is_on(self) -> bool {
        self == Toggle::On
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_file) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            println!(
                "Sorry! Something unexpected happened. Check the logs or contact the developer for assistance."
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    tracing::info!(
        white = %cli.white,
        blue = %cli.blue,
        seed = ?cli.seed,
        "starting game"
    );

    let game = match cli.seed {
        Some(seed) => Game::with_seed(cli.white, cli.blue, seed),
        None => Game::new(cli.white, cli.blue),
    };
    let settings = Settings {
        undo_redo: cli.undo_redo.is_on(),
        show_score: cli.score.is_on(),
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(game, stdin.lock(), io::stdout(), settings);
    shell.run()
}
