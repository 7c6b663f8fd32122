//! Character-at-a-time guess editor
//!
//! Reads raw bytes from a source, echoes them itself and only gives back a
//! guess once all four slots are filled and the player presses enter.

use super::key::Key;
use crate::core::{CODE_LENGTH, Code, Guess};
use crossterm::{
    cursor::MoveLeft,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Read, Write};
use tracing::debug;

/// Fill level of the line being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Empty,
    Partial(usize),
    Full,
}

/// Result of feeding one key to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep reading
    Continue,
    /// The line was full and got submitted
    Submitted(Guess),
    /// The player asked to stop
    Aborted,
}

/// Assembles one guess per call from a raw byte source
#[derive(Debug)]
pub struct InputEditor<R> {
    source: R,
    buffer: [u8; CODE_LENGTH],
    len: usize,
}

impl<R> InputEditor<R> {
    #[must_use]
    pub const fn new(source: R) -> Self {
        Self {
            source,
            buffer: [0; CODE_LENGTH],
            len: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> EditorState {
        match self.len {
            0 => EditorState::Empty,
            CODE_LENGTH => EditorState::Full,
            k => EditorState::Partial(k),
        }
    }

    /// Symbols typed so far on the current line
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Apply one key, echoing any visible change to `echo`
    ///
    /// # Errors
    ///
    /// Returns an error if writing the echo fails.
    pub fn apply<W: Write>(&mut self, key: Key, echo: &mut W) -> io::Result<Step> {
        let step = match key {
            Key::Symbol(symbol) if self.len < CODE_LENGTH => {
                self.buffer[self.len] = symbol;
                self.len += 1;
                echo.write_all(&[symbol, b' '])?;
                Step::Continue
            }
            Key::Backspace if self.len > 0 => {
                erase(echo, 1)?;
                self.len -= 1;
                Step::Continue
            }
            Key::KillLine if self.len > 0 => {
                erase(echo, self.len)?;
                self.len = 0;
                Step::Continue
            }
            Key::Submit if self.len == CODE_LENGTH => {
                self.len = 0;
                Step::Submitted(Code::from_symbols(self.buffer))
            }
            Key::Abort => {
                self.len = 0;
                Step::Aborted
            }
            // Full buffer, empty buffer or an unknown byte: nothing changes
            _ => Step::Continue,
        };

        echo.flush()?;
        Ok(step)
    }
}

impl<R: Read> InputEditor<R> {
    /// Block until the player submits a full guess
    ///
    /// Returns `None` when the player aborts or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the source or writing the echo fails.
    pub fn read_guess<W: Write>(&mut self, echo: &mut W) -> io::Result<Option<Guess>> {
        loop {
            let Some(byte) = self.next_byte()? else {
                debug!(pending = self.len, "input closed");
                self.len = 0;
                return Ok(None);
            };

            match self.apply(Key::decode(byte), echo)? {
                Step::Continue => {}
                Step::Submitted(guess) => return Ok(Some(guess)),
                Step::Aborted => {
                    debug!("aborted by player");
                    return Ok(None);
                }
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.source.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

/// Erase the last `count` echoed symbols together with their separators
fn erase<W: Write>(echo: &mut W, count: usize) -> io::Result<()> {
    // count never exceeds CODE_LENGTH
    let columns = (count * 2) as u16;
    queue!(echo, MoveLeft(columns), Clear(ClearType::UntilNewLine))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERASE_ONE: &str = "\x1b[2D\x1b[K";

    fn run(input: &[u8]) -> (Option<Guess>, String) {
        let mut editor = InputEditor::new(input);
        let mut echo = Vec::new();
        let guess = editor.read_guess(&mut echo).unwrap();
        (guess, String::from_utf8(echo).unwrap())
    }

    fn feed(editor: &mut InputEditor<&[u8]>, bytes: &[u8]) -> Vec<Step> {
        let mut sink = Vec::new();
        bytes
            .iter()
            .map(|&b| editor.apply(Key::decode(b), &mut sink).unwrap())
            .collect()
    }

    #[test]
    fn simple_guess() {
        let (guess, echo) = run(b"2340\n");
        assert_eq!(guess, Some(Code::new("2340").unwrap()));
        assert_eq!(echo, "2 3 4 0 ");
    }

    #[test]
    fn carriage_return_submits() {
        let (guess, _) = run(b"1234\r");
        assert_eq!(guess, Some(Code::new("1234").unwrap()));
    }

    #[test]
    fn state_transitions() {
        let mut editor = InputEditor::new(&b""[..]);
        assert_eq!(editor.state(), EditorState::Empty);

        feed(&mut editor, b"1");
        assert_eq!(editor.state(), EditorState::Partial(1));

        feed(&mut editor, b"234");
        assert_eq!(editor.state(), EditorState::Full);

        feed(&mut editor, &[127]);
        assert_eq!(editor.state(), EditorState::Partial(3));

        feed(&mut editor, &[21]);
        assert_eq!(editor.state(), EditorState::Empty);
    }

    #[test]
    fn extra_symbols_are_dropped_when_full() {
        let (guess, echo) = run(b"123456\n");
        assert_eq!(guess, Some(Code::new("1234").unwrap()));
        assert_eq!(echo, "1 2 3 4 ");
    }

    #[test]
    fn early_submit_has_no_effect() {
        let mut editor = InputEditor::new(&b""[..]);
        let steps = feed(&mut editor, b"12\n\r");
        assert!(steps.iter().all(|&s| s == Step::Continue));
        assert_eq!(editor.pending(), b"12");

        let (guess, echo) = run(b"\n12\n34\n");
        assert_eq!(guess, Some(Code::new("1234").unwrap()));
        assert_eq!(echo, "1 2 3 4 ");
    }

    #[test]
    fn backspace_removes_last_symbol() {
        let (guess, echo) = run(b"129\x7f34\n");
        assert_eq!(guess, Some(Code::new("1234").unwrap()));
        assert_eq!(echo, format!("1 2 9 {ERASE_ONE}3 4 "));
    }

    #[test]
    fn ctrl_h_is_backspace() {
        let (guess, _) = run(b"129\x0834\n");
        assert_eq!(guess, Some(Code::new("1234").unwrap()));
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut editor = InputEditor::new(&b""[..]);
        let mut echo = Vec::new();
        let step = editor.apply(Key::Backspace, &mut echo).unwrap();
        assert_eq!(step, Step::Continue);
        assert_eq!(editor.state(), EditorState::Empty);
        assert!(echo.is_empty());
    }

    #[test]
    fn kill_line_erases_everything_at_once() {
        let (guess, echo) = run(b"987\x155678\n");
        assert_eq!(guess, Some(Code::new("5678").unwrap()));
        assert_eq!(echo, "9 8 7 \x1b[6D\x1b[K5 6 7 8 ");
    }

    #[test]
    fn kill_line_on_empty_is_noop() {
        let mut editor = InputEditor::new(&b""[..]);
        let mut echo = Vec::new();
        editor.apply(Key::KillLine, &mut echo).unwrap();
        assert_eq!(editor.state(), EditorState::Empty);
        assert!(echo.is_empty());
    }

    #[test]
    fn other_bytes_are_ignored() {
        let (guess, echo) = run(b"a1 b2\t3\x1b4x\n");
        assert_eq!(guess, Some(Code::new("1234").unwrap()));
        assert_eq!(echo, "1 2 3 4 ");
    }

    #[test]
    fn abort_and_end_of_input() {
        assert_eq!(run(b"12\x03").0, None);
        assert_eq!(run(b"12\x04").0, None);
        assert_eq!(run(b"123").0, None);
        assert_eq!(run(b"").0, None);
    }

    #[test]
    fn consecutive_guesses_start_empty() {
        let mut editor = InputEditor::new(&b"1111\n2222\n"[..]);
        let mut echo = Vec::new();
        assert_eq!(
            editor.read_guess(&mut echo).unwrap(),
            Some(Code::new("1111").unwrap())
        );
        assert_eq!(editor.state(), EditorState::Empty);
        assert_eq!(
            editor.read_guess(&mut echo).unwrap(),
            Some(Code::new("2222").unwrap())
        );
        assert_eq!(editor.read_guess(&mut echo).unwrap(), None);
    }
}
