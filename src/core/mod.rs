//! Core domain types for the game
//!
//! Codes, feedback scoring, secret generation and game progress. Nothing here
//! touches the terminal, so every type is pure and directly testable.

mod code;
mod feedback;
mod secret;
mod state;

pub use code::{CODE_LENGTH, Code, CodeError, Guess, Secret, is_symbol};
pub use feedback::{Feedback, ParseFeedbackError, Tag};
pub use secret::{SECRET_DIGITS, SecretGenerator};
pub use state::{Attempt, GameState, Outcome};
