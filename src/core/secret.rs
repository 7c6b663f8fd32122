//! Secret code generation
//!
//! The generator is seeded exactly once, either from a caller-supplied seed
//! or from the wall clock, and every secret is drawn from that one stream.

use super::code::{CODE_LENGTH, Code, Secret};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

/// Digits a secret may contain
///
/// Only nine values are drawn: `9` never appears in a secret even though the
/// player may type it. This keeps the classic game's search space of 9^4.
pub const SECRET_DIGITS: RangeInclusive<u8> = b'0'..=b'8';

/// Produces secrets from a single seeded random stream
#[derive(Debug, Clone)]
pub struct SecretGenerator {
    rng: StdRng,
    seed: u64,
}

impl SecretGenerator {
    /// Create a generator with a fixed seed
    ///
    /// # Examples
    /// ```
    /// use mind::core::SecretGenerator;
    ///
    /// let a = SecretGenerator::from_seed(7).generate();
    /// let b = SecretGenerator::from_seed(7).generate();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator seeded from the current time
    #[must_use]
    pub fn from_clock() -> Self {
        // A clock before the epoch only happens on badly misconfigured hosts
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        Self::from_seed(seed)
    }

    /// The seed this generator was created with
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a new secret
    pub fn generate(&mut self) -> Secret {
        let mut symbols = [0u8; CODE_LENGTH];
        for symbol in &mut symbols {
            *symbol = self.rng.random_range(SECRET_DIGITS);
        }
        Code::from_symbols(symbols)
    }
}
