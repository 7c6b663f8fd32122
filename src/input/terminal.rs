//! Scoped raw-mode acquisition for standard input
//!
//! [`TerminalGuard`] enables raw mode when standard input is a terminal and
//! restores the previous settings when dropped, whichever way the game ends.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;
use std::io;
use tracing::{debug, warn};

/// RAII guard for the terminal mode used while playing
#[derive(Debug)]
pub struct TerminalGuard {
    interactive: bool,
    raw: bool,
}

impl TerminalGuard {
    /// Switch standard input to raw mode if it is a terminal
    ///
    /// Never fails: a non-terminal input silently stays as it is, and any
    /// other failure is reported on stderr before carrying on in cooked mode.
    #[must_use]
    pub fn acquire() -> Self {
        if !io::stdin().is_tty() {
            debug!("stdin is not a terminal, leaving input mode unchanged");
            return Self::cooked();
        }

        match enable_raw_mode() {
            Ok(()) => {
                debug!("raw mode enabled");
                Self {
                    interactive: true,
                    raw: true,
                }
            }
            Err(err) => {
                eprintln!("could not switch terminal to raw mode: {err}");
                warn!(error = %err, "continuing without raw mode");
                Self {
                    interactive: true,
                    raw: false,
                }
            }
        }
    }

    /// A guard that leaves the terminal untouched
    #[must_use]
    pub const fn cooked() -> Self {
        Self {
            interactive: false,
            raw: false,
        }
    }

    /// Whether standard input is a terminal at all
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[must_use]
    pub const fn is_raw(&self) -> bool {
        self.raw
    }

    /// Raw mode also turns off output post-processing, so newlines need an
    /// explicit carriage return.
    #[must_use]
    pub const fn line_ending(&self) -> &'static str {
        if self.raw { "\r\n" } else { "\n" }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.raw {
            if let Err(err) = disable_raw_mode() {
                eprintln!("could not restore terminal settings: {err}");
            } else {
                debug!("terminal settings restored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooked_guard_uses_plain_newlines() {
        let guard = TerminalGuard::cooked();
        assert!(!guard.is_interactive());
        assert!(!guard.is_raw());
        assert_eq!(guard.line_ending(), "\n");
    }

    #[test]
    fn non_terminal_stdin_stays_cooked_and_mono() {
        use crate::output::{ColorMode, ColorTheme, Palette};

        // Only meaningful when the harness runs with redirected stdin
        if io::stdin().is_tty() {
            return;
        }

        let guard = TerminalGuard::acquire();
        assert!(!guard.is_interactive());
        assert!(!guard.is_raw());
        assert_eq!(guard.line_ending(), "\n");
        assert_eq!(
            ColorTheme::resolve(ColorMode::Auto, guard.is_interactive()).palette(),
            Palette::Mono
        );
    }

    #[test]
    fn raw_guard_uses_carriage_returns() {
        // Built by hand so the test never touches the real terminal;
        // forget it so Drop does not try to restore anything.
        let guard = TerminalGuard {
            interactive: true,
            raw: true,
        };
        assert_eq!(guard.line_ending(), "\r\n");
        std::mem::forget(guard);
    }
}
