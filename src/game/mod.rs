//! Round state and scoring

pub mod score;
pub mod session;

pub use score::calculate_score;
pub use session::{GameError, GameSession, GuessResult, MAX_ATTEMPTS};
