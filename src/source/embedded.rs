//! Offline word source backed by in-memory word lists

use super::WordSource;
use crate::core::Word;
use crate::error::SourceError;
use crate::wordlists::{FALLBACK_WORDS, loader::words_from_slice};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Picks answers from a fixed list and validates guesses against an optional dictionary
///
/// Without a dictionary every well-formed guess is accepted.
#[derive(Debug, Clone)]
pub struct EmbeddedWordSource {
    answers: Vec<Word>,
    dictionary: Option<FxHashSet<String>>,
}

impl Default for EmbeddedWordSource {
    fn default() -> Self {
        Self::new(words_from_slice(FALLBACK_WORDS))
    }
}

impl EmbeddedWordSource {
    #[must_use]
    pub fn new(answers: Vec<Word>) -> Self {
        Self {
            answers,
            dictionary: None,
        }
    }

    /// Restrict accepted guesses to `words`; answers are always accepted
    #[must_use]
    pub fn with_dictionary(mut self, words: &[Word]) -> Self {
        let dictionary = words
            .iter()
            .chain(&self.answers)
            .map(|w| w.text().to_string())
            .collect();
        self.dictionary = Some(dictionary);
        self
    }
}

impl WordSource for EmbeddedWordSource {
    fn random_word(&self, length: usize) -> Result<Option<String>, SourceError> {
        let matching: Vec<&Word> = self.answers.iter().filter(|w| w.len() == length).collect();
        Ok(matching
            .choose(&mut rand::rng())
            .map(|w| w.text().to_string()))
    }

    fn word_exists(&self, word: &Word) -> Result<bool, SourceError> {
        Ok(self
            .dictionary
            .as_ref()
            .is_none_or(|dict| dict.contains(word.text())))
    }
}
