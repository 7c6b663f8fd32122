//! Keyboard input for entering guesses
//!
//! Byte decoding, the fixed-width guess editor and the raw-mode guard.

mod editor;
mod key;
mod terminal;

pub use editor::{EditorState, InputEditor, Step};
pub use key::Key;
pub use terminal::TerminalGuard;
