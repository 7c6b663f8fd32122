//! Game progress tracking
//!
//! Holds the secret, the attempts made so far and the outcome. Terminal I/O
//! lives elsewhere; this type only applies the rules.

use super::code::{Guess, Secret};
use super::feedback::Feedback;

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// 1-based attempt number
    pub index: u32,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// How a game ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Solved on the given attempt
    Won { attempt: u32 },
    /// Every chance used without a win
    Exhausted,
    /// The player quit or input ended mid-game
    Abandoned,
}

impl Outcome {
    /// Whether the secret should be shown to the player
    #[must_use]
    pub const fn reveals_secret(self) -> bool {
        matches!(self, Self::Exhausted | Self::Abandoned)
    }
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Secret,
    chances: u32,
    attempts: Vec<Attempt>,
    outcome: Outcome,
}

impl GameState {
    #[must_use]
    pub fn new(secret: Secret, chances: u32) -> Self {
        let outcome = if chances == 0 {
            Outcome::Exhausted
        } else {
            Outcome::InProgress
        };

        Self {
            secret,
            chances,
            attempts: Vec::new(),
            outcome,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    #[must_use]
    pub const fn chances(&self) -> u32 {
        self.chances
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempts_made(&self) -> u32 {
        self.attempts.len() as u32
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Number of the next attempt, or `None` once the game is over
    #[must_use]
    pub fn next_attempt(&self) -> Option<u32> {
        (!self.is_over()).then(|| self.attempts_made() + 1)
    }

    /// Score a guess and advance the game
    ///
    /// # Panics
    /// Panics in debug mode if the game is already over
    pub fn record(&mut self, guess: Guess) -> Attempt {
        debug_assert!(!self.is_over(), "guess recorded after game ended");

        let attempt = Attempt {
            index: self.attempts_made() + 1,
            guess,
            feedback: Feedback::score(&guess, &self.secret),
        };
        self.attempts.push(attempt);

        if attempt.feedback.is_win() {
            self.outcome = Outcome::Won {
                attempt: attempt.index,
            };
        } else if attempt.index >= self.chances {
            self.outcome = Outcome::Exhausted;
        }

        attempt
    }

    /// End the game early without a result
    pub fn abandon(&mut self) {
        if !self.is_over() {
            self.outcome = Outcome::Abandoned;
        }
    }
}
