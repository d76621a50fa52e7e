//! Core types for the word game

pub mod word;

pub use word::{WORD_LENGTH, Word, WordError};
