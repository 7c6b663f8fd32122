//! Four-digit code representation
//!
//! A `Code` is the shared shape of the secret and of every guess: exactly
//! [`CODE_LENGTH`] ASCII digit symbols.

use std::fmt;

/// Number of symbols in every secret and guess
pub const CODE_LENGTH: usize = 4;

/// Check whether a byte belongs to the guess alphabet (ASCII `0`-`9`)
#[inline]
#[must_use]
pub const fn is_symbol(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// A fixed-length sequence of digit symbols
///
/// Used both for the secret chosen by the game and for each guess the
/// player submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// The target sequence chosen once per game
pub type Secret = Code;

/// One candidate sequence submitted during an attempt
pub type Guess = Code;

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidSymbol(ch) => write!(f, "Code contains non-digit symbol '{ch}'"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from text such as `"2340"`
    ///
    /// # Errors
    /// Returns `CodeError` if the text is not exactly four ASCII digits.
    ///
    /// # Examples
    /// ```
    /// use mind::core::Code;
    ///
    /// let code = Code::new("2340").unwrap();
    /// assert_eq!(code.to_string(), "2340");
    ///
    /// assert!(Code::new("234").is_err());
    /// assert!(Code::new("23a0").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let count = text.chars().count();
        if count != CODE_LENGTH {
            return Err(CodeError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_digit()) {
            return Err(CodeError::InvalidSymbol(bad));
        }

        let mut symbols = [0u8; CODE_LENGTH];
        symbols.copy_from_slice(text.as_bytes());
        Ok(Self(symbols))
    }

    /// Build a code from symbols that are already known to be digits
    ///
    /// # Panics
    /// Panics in debug mode if any byte is not an ASCII digit
    #[inline]
    #[must_use]
    pub fn from_symbols(symbols: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(symbols.iter().all(|&b| is_symbol(b)), "non-digit symbol");
        Self(symbols)
    }

    /// Get the symbols as a byte array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the symbol at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check whether `symbol` appears anywhere except at `position`
    #[must_use]
    pub fn occurs_elsewhere(&self, symbol: u8, position: usize) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(j, &s)| j != position && s == symbol)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", symbol as char)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
