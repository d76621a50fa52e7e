//! Play command: the interactive game loop
//!
//! Input comes from any [`BufRead`], so the whole loop can be driven from
//! tests with an [`io::Cursor`](std::io::Cursor). A "run" is a streak of
//! rounds whose win points add up; the total is saved to the score store
//! when the run ends.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::Word;
use crate::game::GameSession;
use crate::output::{print_banner, print_records};
use crate::store::ScoreStore;
use crate::wordbank::WordBank;

/// One line of player input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerInput {
    Guess(Word),
    NewRun,
    Records,
    Quit,
    Invalid,
}

/// Run the game until the player quits or input ends.
///
/// # Errors
/// Fails only on terminal I/O errors or when the bank cannot supply a
/// target word; score-file problems are reported and played through.
pub fn run_play<R: BufRead>(bank: &WordBank, store: &ScoreStore, mut input: R) -> Result<()> {
    print_banner();

    let mut total: u32 = 0;
    let mut session = new_round(bank)?;

    loop {
        prompt(session.attempts_left())?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match parse_input(&line) {
            PlayerInput::Quit => break,
            PlayerInput::NewRun => {
                record_total(store, &mut total);
                session = new_round(bank)?;
            }
            PlayerInput::Records => print_records(&store.load_all()),
            PlayerInput::Invalid => println!("Enter a word of exactly 4 letters."),
            PlayerInput::Guess(word) => {
                let result = session.evaluate_guess(&word);
                if result.is_correct {
                    println!("{}", result.message.green().bold());
                    total += result.score;
                    println!("Run total: {total} points.");
                    if ask_yes_no(&mut input, "[y/n]:")? {
                        session = new_round(bank)?;
                    } else {
                        record_total(store, &mut total);
                        print_records(&store.load_all());
                        break;
                    }
                } else if result.game_over {
                    println!("{}", result.message.red());
                    println!("The word was: {}", session.target().text().bold());
                    record_total(store, &mut total);
                    if ask_yes_no(&mut input, "Start a new run? [y/n]:")? {
                        session = new_round(bank)?;
                    } else {
                        break;
                    }
                } else {
                    println!("{}", result.message);
                }
            }
        }
    }

    record_total(store, &mut total);
    Ok(())
}

fn parse_input(line: &str) -> PlayerInput {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => PlayerInput::Quit,
        "new" => PlayerInput::NewRun,
        "records" => PlayerInput::Records,
        _ => match Word::new(trimmed) {
            Ok(word) => PlayerInput::Guess(word),
            Err(_) => PlayerInput::Invalid,
        },
    }
}

/// Start a fresh round and show its blank mask.
fn new_round(bank: &WordBank) -> Result<GameSession> {
    let session = GameSession::start(bank).context("could not start a round")?;
    log::debug!("round started with {} candidate words", bank.len());

    println!();
    println!("Word: {}", session.mask());
    Ok(session)
}

/// Save the accumulated run total and reset it to zero.
///
/// A failed write is reported and the total still resets; losing a score
/// must not end the game.
fn record_total(store: &ScoreStore, total: &mut u32) {
    if *total == 0 {
        return;
    }

    if let Err(err) = store.append(*total) {
        log::warn!("could not save score to {}: {err}", store.path().display());
        println!("Could not save your score.");
    }
    *total = 0;
}

fn prompt(attempts_left: u8) -> io::Result<()> {
    print!("[{attempts_left} left] > ");
    io::stdout().flush()
}

/// Read one trimmed line; `None` means input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until the player answers yes or no; end of input counts as no.
fn ask_yes_no<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<bool> {
    loop {
        print!("{prompt} ");
        io::stdout().flush()?;

        let Some(answer) = read_line(input)? else {
            return Ok(false);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
