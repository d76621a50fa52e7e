//! Game word representation
//!
//! A `Word` is a validated four-letter word. The bundled word list is
//! Russian, so words are handled as Unicode characters rather than bytes.

use std::fmt;

/// Number of letters in every playable word.
pub const WORD_LENGTH: usize = 4;

/// A four-letter word, lowercased on construction.
///
/// Stores the text alongside its characters for positional comparison
/// during guess evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new `Word` from a string
    ///
    /// The input is Unicode-lowercased before validation, so `ЛОСЬ` and
    /// `лось` produce equal words.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the input is not exactly
    /// four characters long.
    ///
    /// # Examples
    /// ```
    /// use slovo::core::Word;
    ///
    /// let word = Word::new("лось").unwrap();
    /// assert_eq!(word.text(), "лось");
    ///
    /// assert!(Word::new("слово").is_err());
    /// assert!(Word::new("еж").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let chars: Vec<char> = text.chars().collect();
        let chars: [char; WORD_LENGTH] = chars
            .try_into()
            .map_err(|rest: Vec<char>| WordError::InvalidLength(rest.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
