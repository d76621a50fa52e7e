//! Slovo
//!
//! A terminal word-guessing game: five attempts to find a hidden
//! four-letter Russian word, with persisted high scores.
//!
//! # Quick Start
//!
//! ```rust
//! use slovo::core::Word;
//! use slovo::game::GameSession;
//! use slovo::wordbank::WordBank;
//!
//! // A one-word bank makes the target deterministic.
//! let bank = WordBank::from_str("лось\n");
//! let mut session = GameSession::start(&bank).unwrap();
//!
//! let result = session.evaluate_guess(&Word::new("соло").unwrap());
//! assert_eq!(result.mask, "_ о _ _");
//! assert_eq!(result.remaining_attempts, 4);
//! ```

// Core domain types
pub mod core;

// Round state and scoring
pub mod game;

// Candidate target words
pub mod wordbank;

// Persisted high scores
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
