//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and testable without a terminal or network.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use keyboard::{KEYBOARD_ROWS, KeyStatus};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
