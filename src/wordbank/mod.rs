//! Candidate target words
//!
//! [`WordBank`] holds the words a round may pick its target from. Loading
//! is forgiving: lines are trimmed and lowercased, anything that is not
//! exactly four letters is dropped, and an empty result falls back to a
//! small fixed list so the game can always start.

pub mod embedded;

use std::fs;
use std::io;
use std::path::Path;

use rand::prelude::IndexedRandom;

use crate::core::Word;

/// Words used when a word source yields nothing playable.
pub const FALLBACK_WORDS: [&str; 4] = ["барс", "лось", "рука", "нога"];

/// A non-empty pool of four-letter target words.
///
/// All loading constructors guarantee a playable bank via
/// [`FALLBACK_WORDS`]; only the raw [`WordBank::new`] can produce an empty
/// one.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Build a bank from already-validated words. No fallback is applied.
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Bank built from the word list embedded at compile time.
    #[must_use]
    pub fn bundled() -> Self {
        let bank = Self::from_lines(embedded::BUNDLED.iter().copied());
        log::debug!("loaded {} bundled words", bank.len());
        bank
    }

    /// Parse a bank out of line-oriented text.
    ///
    /// Each line is trimmed and lowercased; lines that are not exactly four
    /// characters long are skipped. If nothing survives the filter, the
    /// fallback list is used instead.
    ///
    /// # Examples
    /// ```
    /// use slovo::wordbank::WordBank;
    ///
    /// let bank = WordBank::from_str("ЛОСЬ\nслово\n  рука  \n\n");
    /// assert_eq!(bank.len(), 2); // "слово" is five letters
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(data: &str) -> Self {
        Self::from_lines(data.lines())
    }

    /// Load a bank from a word-list file, one candidate per line.
    ///
    /// Filtering and fallback behave exactly like [`WordBank::from_str`].
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be read; the
    /// caller asked for this specific file, so a missing one is not
    /// silently replaced by the fallback list.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_str(&content))
    }

    fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let words: Vec<Word> = lines
            .into_iter()
            .map(str::trim)
            .filter_map(|line| Word::new(line).ok())
            .collect();

        if words.is_empty() {
            log::warn!("word source had no playable words, using fallback list");
            let fallback = FALLBACK_WORDS
                .iter()
                .filter_map(|word| Word::new(*word).ok())
                .collect();
            return Self { words: fallback };
        }

        Self { words }
    }

    /// Pick a uniformly random word, or `None` if the bank is empty.
    #[must_use]
    pub fn pick_random(&self) -> Option<&Word> {
        self.words.choose(&mut rand::rng())
    }

    /// All words in the bank.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the bank holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
