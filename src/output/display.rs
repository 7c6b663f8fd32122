//! Game screen output
//!
//! Everything the player sees goes through [`Screen`], which knows the line
//! ending the current terminal mode needs.

use super::theme::ColorTheme;
use crate::core::{Feedback, Secret};
use std::io::{self, Write};

/// Output sink for prompts, feedback and the final reveal
#[derive(Debug)]
pub struct Screen<W> {
    out: W,
    newline: &'static str,
}

impl<W: Write> Screen<W> {
    #[must_use]
    pub const fn new(out: W, newline: &'static str) -> Self {
        Self { out, newline }
    }

    /// Writer used by the input editor for echoing keystrokes
    pub fn echo(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the screen and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the attempt number, right-aligned in two columns
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn prompt(&mut self, attempt: u32) -> io::Result<()> {
        write!(self.out, " {attempt:>2}. ")?;
        self.out.flush()
    }

    /// Print the tags for a scored guess and end the line
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn feedback(&mut self, feedback: &Feedback, theme: &ColorTheme) -> io::Result<()> {
        write!(self.out, " ")?;
        for &tag in feedback.tags() {
            write!(self.out, "{} ", theme.render(tag))?;
        }
        write!(self.out, "{}", self.newline)?;
        self.out.flush()
    }

    /// Print the secret, space separated
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn reveal(&mut self, secret: &Secret) -> io::Result<()> {
        write!(self.out, " answer:")?;
        for &symbol in secret.symbols() {
            write!(self.out, " {}", symbol as char)?;
        }
        write!(self.out, "{}", self.newline)?;
        self.out.flush()
    }

    /// Finish a line left open by an abandoned attempt
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn end_line(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.newline)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::output::Palette;

    fn text(screen: Screen<Vec<u8>>) -> String {
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn prompt_is_right_aligned() {
        let mut screen = Screen::new(Vec::new(), "\n");
        screen.prompt(3).unwrap();
        screen.prompt(10).unwrap();
        assert_eq!(text(screen), "  3.  10. ");
    }

    #[test]
    fn feedback_line_in_mono() {
        let mut screen = Screen::new(Vec::new(), "\n");
        let theme = ColorTheme::new(Palette::Mono);
        screen.feedback(&"YGRY".parse().unwrap(), &theme).unwrap();
        assert_eq!(text(screen), " Y G R Y \n");
    }

    #[test]
    fn reveal_lists_symbols() {
        let mut screen = Screen::new(Vec::new(), "\r\n");
        screen.reveal(&Code::new("2340").unwrap()).unwrap();
        assert_eq!(text(screen), " answer: 2 3 4 0\r\n");
    }
}
