//! A single guessing round
//!
//! [`GameSession`] owns the hidden target word, the remaining attempts, and
//! the letters revealed so far. [`GameSession::evaluate_guess`] runs one
//! guess through the comparison pass and reports everything the caller
//! needs to render the round.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::core::{WORD_LENGTH, Word};
use crate::game::score::calculate_score;
use crate::wordbank::WordBank;

/// Attempts granted at the start of every round.
pub const MAX_ATTEMPTS: u8 = 5;

/// Error type for starting a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word bank had no words to pick a target from.
    EmptyWordBank,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordBank => write!(f, "No words available to start a round"),
        }
    }
}

impl std::error::Error for GameError {}

/// Everything produced by evaluating one guess.
///
/// Derived per guess and never stored; the session itself keeps only the
/// durable state (attempts, revealed positions, discovered letters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// The guess matched the target exactly.
    pub is_correct: bool,
    /// The round ended, by win or by running out of attempts.
    pub game_over: bool,
    /// Attempts remaining after this guess.
    pub remaining_attempts: u8,
    /// Points earned by this guess (zero unless it won the round).
    pub score: u32,
    /// Revealed positions joined by spaces, `_` for unknown: `л _ _ ь`.
    pub mask: String,
    /// Letters present in the target but placed wrong in this guess,
    /// in guess order, deduplicated, and excluding letters already
    /// revealed at their correct position.
    pub misplaced_letters: Vec<char>,
    /// Ready-to-print status line for this guess.
    pub message: String,
}

/// State of one round: hidden target, attempts, revealed letters.
///
/// Sessions are replaced wholesale: "new game" and "keep playing after a
/// win" both mean constructing a fresh session via [`GameSession::start`].
///
/// # Examples
/// ```
/// use slovo::core::Word;
/// use slovo::game::GameSession;
/// use slovo::wordbank::WordBank;
///
/// // A one-word bank makes the target deterministic.
/// let bank = WordBank::new(vec![Word::new("лось")?]);
/// let mut session = GameSession::start(&bank)?;
///
/// let result = session.evaluate_guess(&Word::new("нога")?);
/// assert!(!result.is_correct);
/// assert_eq!(result.remaining_attempts, 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    attempts_left: u8,
    position_state: [Option<char>; WORD_LENGTH],
    discovered: FxHashSet<char>,
}

impl GameSession {
    /// Start a fresh round with a random target from the bank.
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordBank`] if the bank holds no words.
    pub fn start(bank: &WordBank) -> Result<Self, GameError> {
        let target = bank.pick_random().ok_or(GameError::EmptyWordBank)?.clone();

        Ok(Self {
            target,
            attempts_left: MAX_ATTEMPTS,
            position_state: [None; WORD_LENGTH],
            discovered: FxHashSet::default(),
        })
    }

    /// Evaluate one guess against the target.
    ///
    /// Consumes an attempt first (even for a winning guess), then walks the
    /// four positions once. An exact positional match is revealed for the
    /// rest of the round; a letter that exists elsewhere in the target is
    /// reported as misplaced unless it already sits revealed somewhere,
    /// including a position revealed earlier in this same pass.
    #[must_use]
    pub fn evaluate_guess(&mut self, guess: &Word) -> GuessResult {
        self.attempts_left = self.attempts_left.saturating_sub(1);

        let mut misplaced: Vec<char> = Vec::new();
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == self.target.char_at(i) {
                self.position_state[i] = Some(letter);
                self.discovered.insert(letter);
            } else if self.target.contains(letter)
                && !self.discovered.contains(&letter)
                && !misplaced.contains(&letter)
            {
                misplaced.push(letter);
            }
        }

        let is_correct = *guess == self.target;
        let game_over = is_correct || self.attempts_left == 0;
        let score = if is_correct { self.round_score() } else { 0 };
        let mask = self.mask();

        let message = if is_correct {
            format!("You guessed the word and earned {score} points. Continue?")
        } else if game_over {
            format!("Out of attempts. Score: {score}")
        } else {
            format!(
                "Discovered letters: {}\nWord: {mask}",
                join_letters(&misplaced)
            )
        };

        GuessResult {
            is_correct,
            game_over,
            remaining_attempts: self.attempts_left,
            score,
            mask,
            misplaced_letters: misplaced,
            message,
        }
    }

    /// Attempts remaining in this round.
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    /// The hidden target word. Callers reveal it when the round is lost.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Points a win would earn right now, given the attempts already spent.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        calculate_score(i32::from(self.attempts_left))
    }

    /// Render the revealed positions: characters joined by spaces, `_` for
    /// positions not yet guessed correctly.
    #[must_use]
    pub fn mask(&self) -> String {
        self.position_state
            .iter()
            .map(|slot| slot.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Join letters as `а, б` for display, `-` when there are none.
fn join_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters
            .iter()
            .map(|letter| letter.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(target: &str) -> GameSession {
        let bank = WordBank::new(vec![Word::new(target).unwrap()]);
        GameSession::start(&bank).unwrap()
    }

    fn guess(session: &mut GameSession, word: &str) -> GuessResult {
        session.evaluate_guess(&Word::new(word).unwrap())
    }

    #[test]
    fn start_fails_on_empty_bank() {
        let bank = WordBank::new(Vec::new());
        assert_eq!(
            GameSession::start(&bank).unwrap_err(),
            GameError::EmptyWordBank
        );
    }

    #[test]
    fn fresh_session_has_full_attempts_and_blank_mask() {
        let session = session_with("лось");
        assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(session.mask(), "_ _ _ _");
    }

    #[test]
    fn attempts_decrease_by_one_per_guess() {
        let mut session = session_with("лось");
        for k in 1..=5u8 {
            let result = guess(&mut session, "жаба");
            assert_eq!(result.remaining_attempts, 5 - k);
        }
        assert_eq!(session.attempts_left(), 0);
    }

    #[test]
    fn attempts_never_go_negative() {
        let mut session = session_with("лось");
        for _ in 0..7 {
            let _ = guess(&mut session, "жаба");
        }
        assert_eq!(session.attempts_left(), 0);
    }

    #[test]
    fn correct_guess_wins_regardless_of_attempt() {
        let mut session = session_with("лось");
        for _ in 0..3 {
            let _ = guess(&mut session, "жаба");
        }
        let result = guess(&mut session, "лось");
        assert!(result.is_correct);
        assert!(result.game_over);
    }

    #[test]
    fn first_try_win_scores_five() {
        let mut session = session_with("лось");
        let result = guess(&mut session, "лось");

        assert!(result.is_correct);
        assert!(result.game_over);
        assert_eq!(result.score, 5);
        assert_eq!(result.remaining_attempts, 4);
        assert_eq!(result.mask, "л о с ь");
        assert_eq!(
            result.message,
            "You guessed the word and earned 5 points. Continue?"
        );
    }

    #[test]
    fn win_on_final_attempt_beats_loss() {
        let mut session = session_with("лось");
        for _ in 0..4 {
            let _ = guess(&mut session, "жаба");
        }
        let result = guess(&mut session, "лось");

        assert!(result.is_correct);
        assert!(result.game_over);
        assert_eq!(result.remaining_attempts, 0);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn exhausted_attempts_end_the_round_as_a_loss() {
        let mut session = session_with("лось");
        for _ in 0..4 {
            let result = guess(&mut session, "жаба");
            assert!(!result.game_over);
        }
        let result = guess(&mut session, "жаба");

        assert!(!result.is_correct);
        assert!(result.game_over);
        assert_eq!(result.score, 0);
        assert_eq!(result.message, "Out of attempts. Score: 0");
    }

    #[test]
    fn single_positional_match_shows_in_mask() {
        let mut session = session_with("рука");
        let result = guess(&mut session, "нога");

        assert!(!result.is_correct);
        assert!(!result.game_over);
        assert_eq!(result.remaining_attempts, 4);
        assert_eq!(result.mask, "_ _ _ а");
    }

    #[test]
    fn mask_never_regresses_across_guesses() {
        let mut session = session_with("рука");
        let first = guess(&mut session, "нога");
        assert_eq!(first.mask, "_ _ _ а");

        // A guess with no matches at all leaves the reveal intact.
        let second = guess(&mut session, "поле");
        assert_eq!(second.mask, "_ _ _ а");

        let third = guess(&mut session, "репа");
        assert_eq!(third.mask, "р _ _ а");
    }

    #[test]
    fn misplaced_letters_reported_in_guess_order() {
        let mut session = session_with("лось");
        let result = guess(&mut session, "соло");

        // 'о' lands correctly at position 1 during this same pass, so its
        // other occurrences are not reported as misplaced.
        assert_eq!(result.misplaced_letters, vec!['с', 'л']);
        assert_eq!(result.mask, "_ о _ _");
        assert_eq!(
            result.message,
            "Discovered letters: с, л\nWord: _ о _ _"
        );
    }

    #[test]
    fn misplaced_letters_are_deduplicated() {
        let mut session = session_with("мама");
        let result = guess(&mut session, "амам");

        assert_eq!(result.misplaced_letters, vec!['а', 'м']);
    }

    #[test]
    fn revealed_letters_are_not_reported_misplaced_later() {
        let mut session = session_with("лось");
        let first = guess(&mut session, "лужа");
        assert_eq!(first.mask, "л _ _ _");
        assert!(first.misplaced_letters.is_empty());

        // 'л' is already revealed at position 0, so a wrong-position 'л'
        // in a later guess is not announced again.
        let second = guess(&mut session, "пыль");
        assert_eq!(second.mask, "л _ _ ь");
        assert!(second.misplaced_letters.is_empty());
    }

    #[test]
    fn progress_message_shows_dash_when_nothing_discovered() {
        let mut session = session_with("лось");
        let result = guess(&mut session, "гнев");

        assert!(result.misplaced_letters.is_empty());
        assert_eq!(result.message, "Discovered letters: -\nWord: _ _ _ _");
    }

    #[test]
    fn round_score_tracks_attempts_spent() {
        let mut session = session_with("лось");
        assert_eq!(session.round_score(), 0); // 5 attempts left: out of range
        let _ = guess(&mut session, "жаба");
        assert_eq!(session.round_score(), 5);
        let _ = guess(&mut session, "жаба");
        assert_eq!(session.round_score(), 4);
    }

    #[test]
    fn target_is_exposed_for_the_loss_reveal() {
        let session = session_with("нога");
        assert_eq!(session.target().text(), "нога");
    }
}
