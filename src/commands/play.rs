//! Playing a game
//!
//! [`GameLoop`] runs the attempts: prompt, read a guess, score it, print the
//! tags. [`run_game`] wraps it with secret generation and the final reveal.

use crate::config::GameConfig;
use crate::core::{GameState, Outcome, Secret, SecretGenerator};
use crate::input::InputEditor;
use crate::output::{ColorTheme, Screen};
use std::io::{self, Read, Write};
use tracing::{debug, info};

/// Drives the attempts of one game
#[derive(Debug)]
pub struct GameLoop<'a, R, W> {
    editor: InputEditor<R>,
    screen: Screen<W>,
    theme: &'a ColorTheme,
}

impl<'a, R: Read, W: Write> GameLoop<'a, R, W> {
    #[must_use]
    pub const fn new(input: R, screen: Screen<W>, theme: &'a ColorTheme) -> Self {
        Self {
            editor: InputEditor::new(input),
            screen,
            theme,
        }
    }

    /// Play until the secret is found, chances run out or input stops
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn play(&mut self, secret: Secret, chances: u32) -> io::Result<GameState> {
        let mut state = GameState::new(secret, chances);

        while let Some(index) = state.next_attempt() {
            self.screen.prompt(index)?;

            let Some(guess) = self.editor.read_guess(self.screen.echo())? else {
                self.screen.end_line()?;
                state.abandon();
                break;
            };

            let attempt = state.record(guess);
            self.screen.feedback(&attempt.feedback, self.theme)?;
            debug!(
                attempt = attempt.index,
                guess = %attempt.guess,
                feedback = %attempt.feedback,
                greens = attempt.feedback.count_greens(),
                yellows = attempt.feedback.count_yellows(),
                "attempt scored"
            );
        }

        Ok(state)
    }

    /// Print the secret
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn reveal(&mut self, secret: &Secret) -> io::Result<()> {
        self.screen.reveal(secret)
    }

    /// Consume the loop and return the screen
    pub fn into_screen(self) -> Screen<W> {
        self.screen
    }
}

/// Play a full game with the given configuration
///
/// The secret is revealed when the player does not find it.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_game<R: Read, W: Write>(
    config: &GameConfig,
    theme: &ColorTheme,
    input: R,
    screen: Screen<W>,
) -> io::Result<GameState> {
    let mut generator = config
        .seed
        .map_or_else(SecretGenerator::from_clock, SecretGenerator::from_seed);
    let secret = generator.generate();
    info!(
        chances = config.chances,
        palette = %theme.palette(),
        seed = generator.seed(),
        "game started"
    );

    let mut game = GameLoop::new(input, screen, theme);
    let state = game.play(secret, config.chances)?;

    if state.outcome().reveals_secret() {
        game.reveal(state.secret())?;
    }

    match state.outcome() {
        Outcome::Won { attempt } => info!(attempt, "secret found"),
        outcome => info!(?outcome, attempts = state.attempts_made(), "game over"),
    }

    Ok(state)
}
