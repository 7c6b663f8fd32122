//! Game configuration
//!
//! Raw command-line values are resolved once into a [`GameConfig`]. Bad values
//! never abort the game: they fall back to defaults, and an unknown color mode
//! or seed is reported as a [`ConfigWarning`].

use crate::output::ColorMode;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Attempts allowed when none (or nonsense) is given
pub const DEFAULT_CHANCES: u32 = 10;

/// Problem found while resolving the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    InvalidColorMode(String),
    InvalidSeed(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorMode(_) => write!(f, "invalid color mode, falling back to mono"),
            Self::InvalidSeed(seed) => {
                write!(f, "invalid seed '{seed}', seeding from the clock")
            }
        }
    }
}

/// Settings for one run, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub chances: u32,
    pub color_mode: ColorMode,
    /// Fixed secret seed; `None` seeds from the clock
    pub seed: Option<u64>,
    pub warnings: Vec<ConfigWarning>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            chances: DEFAULT_CHANCES,
            color_mode: ColorMode::Auto,
            seed: None,
            warnings: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Resolve raw option values
    ///
    /// # Examples
    /// ```
    /// use mind::config::GameConfig;
    /// use mind::output::ColorMode;
    ///
    /// let config = GameConfig::from_args("abc", "neon", None);
    /// assert_eq!(config.chances, 10);
    /// assert_eq!(config.color_mode, ColorMode::Mono);
    /// assert_eq!(config.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn from_args(chances: &str, color: &str, seed: Option<&str>) -> Self {
        let mut warnings = Vec::new();

        let color_mode = ColorMode::from_name(color).unwrap_or_else(|| {
            warnings.push(ConfigWarning::InvalidColorMode(color.to_string()));
            ColorMode::Mono
        });

        let seed = seed.and_then(|text| {
            let parsed = parse_seed(text);
            if parsed.is_none() {
                warnings.push(ConfigWarning::InvalidSeed(text.to_string()));
            }
            parsed
        });

        Self {
            chances: parse_chances(chances),
            color_mode,
            seed,
            warnings,
        }
    }
}

/// Print every warning to `out`, one per line
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn report_warnings<W: Write>(warnings: &[ConfigWarning], out: &mut W) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "{warning}")?;
        warn!(?warning, "configuration fallback");
    }
    out.flush()
}

/// Parse a seed value; `None` means the clock will be used instead
#[must_use]
pub fn parse_seed(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}

/// Parse a chances value, falling back to [`DEFAULT_CHANCES`] for anything
/// that is not a positive number
#[must_use]
pub fn parse_chances(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(0) | Err(_) => {
            debug!(value = text, default = DEFAULT_CHANCES, "unusable chances value");
            DEFAULT_CHANCES
        }
        Ok(n) => n,
    }
}
