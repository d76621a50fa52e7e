//! Terminal presentation helpers

use colored::Colorize;

use crate::game::MAX_ATTEMPTS;

/// Greeting shown when an interactive game starts.
pub fn print_banner() {
    println!("{}", "slovo".cyan().bold());
    println!("Guess the hidden four-letter word in {MAX_ATTEMPTS} attempts.");
    println!("Type 'new' for a fresh run, 'records' for the leaderboard, 'quit' to leave.");
}

/// Print the leaderboard, best score first.
pub fn print_records(scores: &[u32]) {
    if scores.is_empty() {
        println!("No records yet.");
        return;
    }

    println!("{}", "Records".bold());
    for (idx, score) in sorted_descending(scores).iter().enumerate() {
        let line = format!("{:>3}. {score}", idx + 1);
        match idx {
            0 => println!("{}", line.yellow().bold()),
            1 | 2 => println!("{}", line.cyan()),
            _ => println!("{line}"),
        }
    }
}

/// Scores ordered best-first for display.
#[must_use]
pub fn sorted_descending(scores: &[u32]) -> Vec<u32> {
    let mut sorted = scores.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}
