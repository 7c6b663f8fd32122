//! Positional feedback for a guess
//!
//! Each position of a guess is tagged independently:
//! - Green: the symbol matches the secret at the same position
//! - Yellow: the symbol occurs at some other position of the secret
//! - Red: the symbol does not occur in the secret
//!
//! Yellow matches do not consume the secret slot they matched, so one
//! repeated secret digit can turn several guess positions yellow.

use super::code::{CODE_LENGTH, Guess, Secret};
use std::fmt;

/// Verdict for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Green,
    Yellow,
    Red,
}

impl Tag {
    /// Single-letter form used in mono output and logs
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Red => 'R',
        }
    }
}

/// Feedback tags aligned position by position with the guess that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tag; CODE_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const WIN: Self = Self([Tag::Green; CODE_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// For every position independently:
    /// 1. Same symbol at the same position: Green
    /// 2. Same symbol at any other position of the secret: Yellow
    /// 3. Otherwise: Red
    ///
    /// # Examples
    /// ```
    /// use mind::core::{Code, Feedback};
    ///
    /// let secret = Code::new("2340").unwrap();
    /// let guess = Code::new("0353").unwrap();
    ///
    /// assert_eq!(Feedback::score(&guess, &secret).to_string(), "YGRY");
    /// ```
    #[must_use]
    pub fn score(guess: &Guess, secret: &Secret) -> Self {
        let mut tags = [Tag::Red; CODE_LENGTH];

        for (i, tag) in tags.iter_mut().enumerate() {
            let symbol = guess.symbol_at(i);
            if symbol == secret.symbol_at(i) {
                *tag = Tag::Green;
            } else if secret.occurs_elsewhere(symbol, i) {
                *tag = Tag::Yellow;
            }
        }

        Self(tags)
    }

    /// Get the tags in guess order
    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[Tag; CODE_LENGTH] {
        &self.0
    }

    /// Check if every position is green
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&t| t == Tag::Green)
    }

    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tag::Green).count()
    }

    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tag::Yellow).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "{}", tag.letter())?;
        }
        Ok(())
    }
}

/// Error returned when a tag string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeedbackError(String);

impl fmt::Display for ParseFeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid feedback string: {}", self.0)
    }
}

impl std::error::Error for ParseFeedbackError {}

impl std::str::FromStr for Feedback {
    type Err = ParseFeedbackError;

    /// Parse a string like `"GYRR"` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CODE_LENGTH {
            return Err(ParseFeedbackError(s.to_string()));
        }

        let mut tags = [Tag::Red; CODE_LENGTH];
        for (tag, ch) in tags.iter_mut().zip(chars) {
            *tag = match ch.to_ascii_uppercase() {
                'G' => Tag::Green,
                'Y' => Tag::Yellow,
                'R' => Tag::Red,
                _ => return Err(ParseFeedbackError(s.to_string())),
            };
        }

        Ok(Self(tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::score(&Code::new(guess).unwrap(), &Code::new(secret).unwrap())
    }

    fn fb(s: &str) -> Feedback {
        s.parse().unwrap()
    }

    #[test]
    fn classic_example_sequence() {
        // The three attempts from the game's rules text
        assert_eq!(score("0353", "2340"), fb("YGRY"));
        assert_eq!(score("1246", "2340"), fb("RYGR"));

        let last = score("2340", "2340");
        assert_eq!(last, Feedback::WIN);
        assert!(last.is_win());
    }

    #[test]
    fn identical_codes_always_win() {
        for text in ["0000", "1234", "8888", "9012", "1121"] {
            let feedback = score(text, text);
            assert!(feedback.is_win(), "{text} against itself");
            assert_eq!(feedback.count_greens(), CODE_LENGTH);
        }
    }

    #[test]
    fn absent_symbols_are_red() {
        let feedback = score("5678", "1234");
        assert_eq!(feedback, fb("RRRR"));
        assert!(!feedback.is_win());
        assert_eq!(feedback.count_greens(), 0);
        assert_eq!(feedback.count_yellows(), 0);
    }

    #[test]
    fn green_takes_precedence_over_yellow() {
        // '1' sits at position 0 in both, and also elsewhere in the secret
        let feedback = score("1999", "1001");
        assert_eq!(feedback.tags()[0], Tag::Green);
    }

    #[test]
    fn yellow_does_not_consume_secret_slot() {
        // A single '3' in the secret marks every misplaced guess '3' yellow
        assert_eq!(score("3533", "1300"), fb("YRYY"));
        assert_eq!(score("0333", "3000"), fb("YYYY"));
    }

    #[test]
    fn surplus_guess_digit_is_yellow_when_secret_has_it_elsewhere() {
        // Every secret '1' is already matched green, yet position 2 is still yellow
        assert_eq!(score("1111", "1121"), fb("GGYG"));
    }

    #[test]
    fn scoring_is_deterministic() {
        let guess = Code::new("1246").unwrap();
        let secret = Code::new("2340").unwrap();
        let first = Feedback::score(&guess, &secret);
        for _ in 0..10 {
            assert_eq!(Feedback::score(&guess, &secret), first);
        }
    }

    #[test]
    fn feedback_parse_and_display() {
        let feedback = fb("gyRr");
        assert_eq!(feedback.to_string(), "GYRR");
        assert!("GYR".parse::<Feedback>().is_err());
        assert!("GYRX".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }
}
