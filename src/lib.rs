//! Mind
//!
//! A terminal code-breaking game. The program picks four secret digits and
//! the player has a limited number of attempts to find them, getting
//! green/yellow/red feedback for every position after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use mind::core::{Code, Feedback};
//!
//! let secret = Code::new("2340").unwrap();
//! let guess = Code::new("1246").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.to_string(), "RYGR");
//! ```

// Core domain types
pub mod core;

// Option resolution
pub mod config;

// Raw keyboard input
pub mod input;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;
