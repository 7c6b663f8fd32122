//! Decoding raw input bytes into editor keys

use crate::core::is_symbol;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;
const KILL_LINE: u8 = 0x15; // ^U
const INTERRUPT: u8 = 0x03; // ^C
const END_OF_TRANSMISSION: u8 = 0x04; // ^D

/// What one input byte means to the guess editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit to append
    Symbol(u8),
    /// Remove the last symbol
    Backspace,
    /// Clear the whole line
    KillLine,
    /// Accept the line if it is full
    Submit,
    /// Stop the game (raw mode delivers ^C and ^D as plain bytes)
    Abort,
    /// Anything else
    Ignored,
}

impl Key {
    /// Classify a single byte read from the terminal
    #[must_use]
    pub const fn decode(byte: u8) -> Self {
        // Bytes are decoded one at a time, so digits inside escape sequences
        // (e.g. `ESC [ 3 ~` for Delete) land in the guess like typed ones.
        match byte {
            b'\n' | b'\r' => Self::Submit,
            BACKSPACE | DELETE => Self::Backspace,
            KILL_LINE => Self::KillLine,
            INTERRUPT | END_OF_TRANSMISSION => Self::Abort,
            b if is_symbol(b) => Self::Symbol(b),
            _ => Self::Ignored,
        }
    }
}
