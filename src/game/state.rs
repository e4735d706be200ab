//! Game state machine
//!
//! `Loading → Playing → (Won | Lost | GaveUp)`, with `Loading → NoWord` when the
//! word source has nothing to offer. [`Game::reset`] goes back through `Loading`.

use super::{GuessBuffer, Timer};
use crate::core::{Feedback, KeyStatus, MAX_WORD_LENGTH, Word};
use crate::source::{WordSource, fetch_random_word};

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Ticks the guess row stays highlighted after a rejected guess
pub const SHAKE_TICKS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Playing,
    Won,
    Lost,
    /// The player asked for the answer
    GaveUp,
    /// The source had no word of any length
    NoWord,
}

impl Phase {
    /// True for the terminal phases reached by playing
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::GaveUp)
    }
}

/// A recorded guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Result of [`Game::submit_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not accepting guesses right now
    Ignored,
    /// Some slot is still empty
    Incomplete,
    Won,
    Lost,
    /// Valid guess, attempts remain
    TryAgain,
    /// The source says the guess is not a word
    UnknownWord,
    /// The existence check itself failed
    VerificationFailed,
}

impl SubmitOutcome {
    /// True when the guess consumed an attempt
    #[must_use]
    pub const fn counted(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::TryAgain)
    }
}

/// One game session: hidden word, guesses, keyboard and timer
#[derive(Debug, Clone)]
pub struct Game {
    requested_length: usize,
    word: Option<Word>,
    phase: Phase,
    buffer: GuessBuffer,
    attempts: Vec<Attempt>,
    keyboard: KeyStatus,
    timer: Timer,
    message: Option<Message>,
    shake_ticks: u8,
}

impl Game {
    /// A game waiting for a word of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            requested_length: word_length,
            word: None,
            phase: Phase::Loading,
            buffer: GuessBuffer::new(word_length),
            attempts: Vec::new(),
            keyboard: KeyStatus::new(),
            timer: Timer::new(),
            message: None,
            shake_ticks: 0,
        }
    }

    /// Fetch a hidden word, falling back to shorter lengths
    ///
    /// Returns true if a word was installed. On failure the game enters
    /// [`Phase::NoWord`] and stays there until the next reset.
    pub fn load_word<S: WordSource + ?Sized>(&mut self, source: &S) -> bool {
        self.phase = Phase::Loading;
        match fetch_random_word(source, self.requested_length) {
            Ok(word) => {
                self.install_word(word);
                true
            }
            Err(e) => {
                log::warn!("Could not load a word: {e}");
                self.word = None;
                self.phase = Phase::NoWord;
                self.set_message("No word available.", MessageStyle::Error);
                false
            }
        }
    }

    /// Start playing with a known hidden word
    pub fn install_word(&mut self, word: Word) {
        log::info!("New {}-letter word ready", word.len());
        self.buffer = GuessBuffer::new(word.len());
        self.word = Some(word);
        self.phase = Phase::Playing;
        self.message = None;
    }

    /// Clear every guess and fetch a new word
    pub fn reset<S: WordSource + ?Sized>(&mut self, source: &S) -> bool {
        self.attempts.clear();
        self.keyboard.clear();
        self.timer.reset();
        self.message = None;
        self.shake_ticks = 0;
        self.buffer.clear();
        self.load_word(source)
    }

    /// Change the requested word length and start over
    ///
    /// Returns false and leaves the game untouched if `length` is out of range.
    pub fn set_word_length<S: WordSource + ?Sized>(&mut self, length: usize, source: &S) -> bool {
        if !(1..=MAX_WORD_LENGTH).contains(&length) {
            self.report_invalid_length();
            return false;
        }
        self.requested_length = length;
        self.reset(source)
    }

    /// Tell the player which word lengths are allowed
    pub fn report_invalid_length(&mut self) {
        self.set_message(
            &format!("Word length must be between 1 and {MAX_WORD_LENGTH}."),
            MessageStyle::Error,
        );
    }

    /// Type a letter at the cursor
    pub fn type_letter(&mut self, letter: char) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let typed = self.buffer.type_letter(letter);
        if typed {
            self.timer.start();
        }
        typed
    }

    /// Type a letter into a specific slot
    pub fn set_slot(&mut self, index: usize, letter: char) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let typed = self.buffer.set_slot(index, letter);
        if typed {
            self.timer.start();
        }
        typed
    }

    /// Erase at the cursor, stepping back over an empty slot
    pub fn delete(&mut self) {
        if self.phase == Phase::Playing && self.buffer.delete() {
            self.timer.start();
        }
    }

    /// Empty the guess buffer
    pub fn clear_guess(&mut self) {
        if self.phase == Phase::Playing {
            self.buffer.clear();
        }
    }

    pub fn select(&mut self, index: usize) {
        if self.phase == Phase::Playing {
            self.buffer.select(index);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.phase == Phase::Playing {
            self.buffer.move_cursor(delta);
        }
    }

    /// Submit the buffer as a guess
    ///
    /// An exact match wins without consulting the source. Any other guess is
    /// checked with [`WordSource::word_exists`]; unknown words and failed checks
    /// do not consume an attempt.
    pub fn submit_guess<S: WordSource + ?Sized>(&mut self, source: &S) -> SubmitOutcome {
        if self.phase != Phase::Playing {
            return SubmitOutcome::Ignored;
        }
        let Some(answer) = self.word.clone() else {
            return SubmitOutcome::Ignored;
        };

        let guess = match self.buffer.to_word() {
            None => {
                self.set_message("Complete the word.", MessageStyle::Error);
                return SubmitOutcome::Incomplete;
            }
            Some(Err(e)) => {
                log::warn!("Buffer did not form a word: {e}");
                self.reject("That word does not exist.");
                return SubmitOutcome::UnknownWord;
            }
            Some(Ok(guess)) => guess,
        };

        if guess == answer {
            self.record(guess, &answer);
            self.finish(Phase::Won);
            let attempts = self.attempts.len();
            self.set_message(
                &format!("Correct! You got it in {attempts} attempt(s)."),
                MessageStyle::Success,
            );
            return SubmitOutcome::Won;
        }

        match source.word_exists(&guess) {
            Ok(false) => {
                self.reject("That word does not exist.");
                SubmitOutcome::UnknownWord
            }
            Err(e) => {
                log::warn!("Word check failed: {e}");
                self.reject("Could not verify the word.");
                SubmitOutcome::VerificationFailed
            }
            Ok(true) => {
                self.record(guess, &answer);
                if self.attempts.len() >= MAX_ATTEMPTS {
                    self.finish(Phase::Lost);
                    self.set_message(
                        &format!("You lost. The word was: {answer}"),
                        MessageStyle::Error,
                    );
                    SubmitOutcome::Lost
                } else {
                    self.set_message("Try again.", MessageStyle::Info);
                    self.buffer.clear();
                    SubmitOutcome::TryAgain
                }
            }
        }
    }

    /// Reveal the word and end the game without counting an attempt
    pub fn give_up(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.finish(Phase::GaveUp);
        if let Some(text) = self.word.as_ref().map(|w| format!("The word was: {w}")) {
            self.set_message(&text, MessageStyle::Info);
        }
        true
    }

    /// Advance the clock by one tenth of a second
    pub fn tick(&mut self) {
        self.timer.tick();
        self.shake_ticks = self.shake_ticks.saturating_sub(1);
    }

    fn record(&mut self, guess: Word, answer: &Word) {
        let feedback = Feedback::calculate(&guess, answer);
        self.keyboard.record(&guess, &feedback);
        self.attempts.push(Attempt { guess, feedback });
    }

    fn finish(&mut self, phase: Phase) {
        log::info!(
            "Game over ({phase:?}) after {} attempt(s) in {}",
            self.attempts.len(),
            self.timer
        );
        self.phase = phase;
        self.timer.stop();
    }

    fn reject(&mut self, text: &str) {
        self.set_message(text, MessageStyle::Error);
        self.shake_ticks = SHAKE_TICKS;
    }

    fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The hidden word, once loaded
    #[must_use]
    pub fn word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    /// Word length asked of the source; the loaded word may be shorter
    #[must_use]
    pub fn requested_length(&self) -> usize {
        self.requested_length
    }

    /// Number of counted guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn attempt_list(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyStatus {
        &self.keyboard
    }

    #[must_use]
    pub fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// True while the rejected-guess highlight is active
    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shake_ticks > 0
    }
}
