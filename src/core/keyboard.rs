//! On-screen keyboard layout and aggregated letter status

use super::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// QWERTY rows shown under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Aggregated feedback per letter across every guess of one game
///
/// A letter's status only strengthens: absent → present → correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatus {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the feedback of one guess into the keyboard
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            let entry = self.statuses.entry(letter).or_default();
            *entry = (*entry).max(status);
        }
    }

    /// Current status of a letter, `None` if it has not been guessed
    #[must_use]
    pub fn status_of(&self, letter: u8) -> LetterStatus {
        self.statuses
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}
