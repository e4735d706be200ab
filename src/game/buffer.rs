//! In-progress guess entry

use crate::core::{Word, WordError};

/// Letter slots for the guess being typed, plus the selected slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    slots: Vec<Option<u8>>,
    cursor: usize,
}

fn normalize(letter: char) -> Option<u8> {
    letter
        .is_ascii_alphabetic()
        .then(|| letter.to_ascii_uppercase() as u8)
}

impl GuessBuffer {
    /// Empty buffer with `len` slots
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Index of the selected slot
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when every slot holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(Option::is_some)
    }

    /// Select a slot; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.slots.len() {
            self.cursor = index;
        }
    }

    /// Move the cursor by `delta`, clamped to the buffer
    pub fn move_cursor(&mut self, delta: isize) {
        if self.slots.is_empty() {
            return;
        }
        let last = self.slots.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Write a letter into the selected slot and advance
    ///
    /// Returns false if `letter` is outside A–Z.
    pub fn type_letter(&mut self, letter: char) -> bool {
        let Some(letter) = normalize(letter) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(self.cursor) else {
            return false;
        };
        *slot = Some(letter);
        if self.cursor + 1 < self.slots.len() {
            self.cursor += 1;
        }
        true
    }

    /// Write a letter into a specific slot, selecting it and advancing past it
    ///
    /// Returns false if the slot does not exist or `letter` is outside A–Z.
    pub fn set_slot(&mut self, index: usize, letter: char) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.cursor = index;
        self.type_letter(letter)
    }

    /// Clear the selected slot, stepping back first if it is already empty
    ///
    /// Returns true if a letter was erased.
    pub fn delete(&mut self) -> bool {
        if self.cursor > 0 && self.slots.get(self.cursor).is_some_and(Option::is_none) {
            self.cursor -= 1;
        }
        self.slots
            .get_mut(self.cursor)
            .and_then(Option::take)
            .is_some()
    }

    /// Empty every slot and select the first
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.cursor = 0;
    }

    /// The typed letters as text, with `_` for empty slots
    #[must_use]
    pub fn text(&self) -> String {
        self.slots
            .iter()
            .map(|s| s.map_or('_', char::from))
            .collect()
    }

    /// Convert a complete buffer to a word
    ///
    /// Returns `None` while any slot is empty.
    ///
    /// # Errors
    /// Returns `WordError` if the letters do not form a valid word.
    pub fn to_word(&self) -> Option<Result<Word, WordError>> {
        self.is_complete().then(|| Word::new(self.text()))
    }
}
