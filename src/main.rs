//! Slovo - CLI
//!
//! Terminal word-guessing game built around four-letter Russian words.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slovo::{
    commands::{run_play, run_records},
    store::ScoreStore,
    wordbank::WordBank,
};

#[derive(Parser)]
#[command(
    name = "slovo",
    about = "Guess the hidden four-letter word in five attempts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom word-list file, one candidate word per line
    #[arg(short, long, global = true, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Score file (default: under the platform data directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    scores: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// Show the high-score table
    Records,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let store = ScoreStore::new(cli.scores.unwrap_or_else(ScoreStore::default_path));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let bank = load_bank(cli.words.as_deref())?;
            run_play(&bank, &store, io::stdin().lock())
        }
        Commands::Records => {
            run_records(&store);
            Ok(())
        }
    }
}

/// Load the word bank from the `-w` flag, or fall back to the bundled list
fn load_bank(path: Option<&Path>) -> Result<WordBank> {
    match path {
        Some(path) => WordBank::from_path(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => Ok(WordBank::bundled()),
    }
}
