//! Terminal output formatting
//!
//! Feedback color themes and the game screen.

pub mod display;
pub mod theme;

pub use display::Screen;
pub use theme::{ColorMode, ColorTheme, Palette};
