//! Command implementations

pub mod play;

pub use play::{GameLoop, run_game};
