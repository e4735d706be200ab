//! Word source adapter
//!
//! A [`WordSource`] answers two questions: "give me a random word of length N"
//! and "does this word exist". [`fetch_random_word`] layers the length-decrement
//! fallback on top of any source.

mod embedded;
mod http;

pub use embedded::EmbeddedWordSource;
pub use http::{DEFAULT_API_URL, DEFAULT_TIMEOUT, HttpWordSource};

use crate::core::Word;
use crate::error::SourceError;

/// A provider of hidden words and guess validation
pub trait WordSource {
    /// Fetch a random word with `length` letters
    ///
    /// Returns `Ok(None)` when the source has no word of that length.
    ///
    /// # Errors
    /// Returns `SourceError` on transport or decoding failure.
    fn random_word(&self, length: usize) -> Result<Option<String>, SourceError>;

    /// Check whether `word` is a real word
    ///
    /// # Errors
    /// Returns `SourceError` on transport or decoding failure.
    fn word_exists(&self, word: &Word) -> Result<bool, SourceError>;
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn random_word(&self, length: usize) -> Result<Option<String>, SourceError> {
        (**self).random_word(length)
    }

    fn word_exists(&self, word: &Word) -> Result<bool, SourceError> {
        (**self).word_exists(word)
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn random_word(&self, length: usize) -> Result<Option<String>, SourceError> {
        (**self).random_word(length)
    }

    fn word_exists(&self, word: &Word) -> Result<bool, SourceError> {
        (**self).word_exists(word)
    }
}

/// Requests per length while the source keeps returning words outside A–Z
pub const REJECTED_WORD_ATTEMPTS: usize = 3;

/// Fetch a random word, falling back to shorter lengths
///
/// Tries `length`, then `length - 1`, down to 1. Empty results and transport
/// errors move on to the next length. A word outside the A–Z alphabet is
/// re-requested at the same length up to [`REJECTED_WORD_ATTEMPTS`] times.
///
/// # Errors
/// Returns `SourceError::NoWordAvailable` when every length fails.
///
/// # Examples
/// ```
/// use letritas::source::{EmbeddedWordSource, fetch_random_word};
///
/// let source = EmbeddedWordSource::default();
/// // The embedded list only has five-letter words
/// let word = fetch_random_word(&source, 7).unwrap();
/// assert_eq!(word.len(), 5);
/// ```
pub fn fetch_random_word<S: WordSource + ?Sized>(
    source: &S,
    length: usize,
) -> Result<Word, SourceError> {
    'lengths: for len in (1..=length).rev() {
        for _ in 0..REJECTED_WORD_ATTEMPTS {
            match source.random_word(len) {
                Ok(Some(text)) if !text.trim().is_empty() => match Word::new(&text) {
                    Ok(word) => {
                        log::debug!("Fetched a {}-letter word", word.len());
                        return Ok(word);
                    }
                    Err(e) => log::warn!("Rejected {len}-letter word from source: {e}"),
                },
                Ok(_) => {
                    log::warn!("No {len}-letter word found");
                    continue 'lengths;
                }
                Err(e) => {
                    log::warn!("Word request for {len} letters failed: {e}");
                    continue 'lengths;
                }
            }
        }
    }

    log::warn!("No word available for length {length} or shorter");
    Err(SourceError::NoWordAvailable { requested: length })
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted in-memory source for game and adapter tests

    use super::WordSource;
    use crate::core::Word;
    use crate::error::SourceError;
    use rustc_hash::{FxHashMap, FxHashSet};
    use std::cell::RefCell;

    /// How a scripted source answers an existence check
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Verify {
        /// Only words in the dictionary exist
        Dictionary,
        /// Every request fails with an I/O error
        Fail,
    }

    pub struct ScriptedSource {
        words: RefCell<FxHashMap<usize, Vec<Option<String>>>>,
        dictionary: FxHashSet<String>,
        verify: Verify,
        pub requested_lengths: RefCell<Vec<usize>>,
        pub checked_words: RefCell<Vec<String>>,
    }

    impl ScriptedSource {
        pub fn new() -> Self {
            Self {
                words: RefCell::new(FxHashMap::default()),
                dictionary: FxHashSet::default(),
                verify: Verify::Dictionary,
                requested_lengths: RefCell::new(Vec::new()),
                checked_words: RefCell::new(Vec::new()),
            }
        }

        /// Queue a word (or a miss) for the next request of its length
        #[must_use]
        pub fn with_word(self, length: usize, word: Option<&str>) -> Self {
            self.words
                .borrow_mut()
                .entry(length)
                .or_default()
                .push(word.map(str::to_string));
            self
        }

        #[must_use]
        pub fn with_dictionary(mut self, words: &[&str]) -> Self {
            self.dictionary = words.iter().map(|w| w.to_ascii_lowercase()).collect();
            self
        }

        #[must_use]
        pub fn with_verify(mut self, verify: Verify) -> Self {
            self.verify = verify;
            self
        }
    }

    impl WordSource for ScriptedSource {
        fn random_word(&self, length: usize) -> Result<Option<String>, SourceError> {
            self.requested_lengths.borrow_mut().push(length);
            let mut words = self.words.borrow_mut();
            match words.get_mut(&length) {
                Some(queue) if !queue.is_empty() => Ok(queue.remove(0)),
                _ => Err(SourceError::Io(std::io::Error::other("connection refused"))),
            }
        }

        fn word_exists(&self, word: &Word) -> Result<bool, SourceError> {
            self.checked_words.borrow_mut().push(word.to_query());
            match self.verify {
                Verify::Dictionary => Ok(self.dictionary.contains(&word.to_query())),
                Verify::Fail => Err(SourceError::Io(std::io::Error::other("timed out"))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedSource;
    use super::*;

    #[test]
    fn fetch_returns_uppercase_word() {
        let source = ScriptedSource::new().with_word(5, Some("gatos"));
        let word = fetch_random_word(&source, 5).unwrap();
        assert_eq!(word.text(), "GATOS");
        assert_eq!(*source.requested_lengths.borrow(), vec![5]);
    }

    #[test]
    fn fetch_falls_back_to_shorter_lengths() {
        let source = ScriptedSource::new()
            .with_word(5, None)
            .with_word(4, Some(""))
            .with_word(3, Some("sol"));

        let word = fetch_random_word(&source, 5).unwrap();
        assert_eq!(word.text(), "SOL");
        assert_eq!(word.len(), 3);
        assert_eq!(*source.requested_lengths.borrow(), vec![5, 4, 3]);
    }

    #[test]
    fn fetch_treats_transport_errors_as_not_found() {
        // No word queued for 6: the scripted source errors
        let source = ScriptedSource::new().with_word(5, Some("perro"));
        let word = fetch_random_word(&source, 6).unwrap();
        assert_eq!(word.text(), "PERRO");
    }

    #[test]
    fn fetch_skips_words_outside_alphabet() {
        let source = ScriptedSource::new()
            .with_word(4, Some("niño"))
            .with_word(3, Some("mar"));
        let word = fetch_random_word(&source, 4).unwrap();
        assert_eq!(word.text(), "MAR");
        // The empty queue errors on the retry, which ends that length
        assert_eq!(*source.requested_lengths.borrow(), vec![4, 4, 3]);
    }

    #[test]
    fn fetch_retries_same_length_after_rejected_word() {
        let source = ScriptedSource::new()
            .with_word(5, Some("árbol"))
            .with_word(5, Some("gatos"))
            .with_word(4, Some("luna"));
        let word = fetch_random_word(&source, 5).unwrap();
        assert_eq!(word.text(), "GATOS");
        assert_eq!(*source.requested_lengths.borrow(), vec![5, 5]);
    }

    #[test]
    fn fetch_gives_up_on_length_after_repeated_rejections() {
        let source = ScriptedSource::new()
            .with_word(5, Some("árbol"))
            .with_word(5, Some("pájaro"))
            .with_word(5, Some("cañón"))
            .with_word(5, Some("gatos"))
            .with_word(4, Some("luna"));
        let word = fetch_random_word(&source, 5).unwrap();
        assert_eq!(word.text(), "LUNA");
        assert_eq!(*source.requested_lengths.borrow(), vec![5, 5, 5, 4]);
    }

    #[test]
    fn fetch_exhausted_reports_no_word() {
        let source = ScriptedSource::new();
        let err = fetch_random_word(&source, 3).unwrap_err();
        assert!(matches!(err, SourceError::NoWordAvailable { requested: 3 }));
        assert_eq!(*source.requested_lengths.borrow(), vec![3, 2, 1]);
    }

    #[test]
    fn fetch_zero_length_makes_no_request() {
        let source = ScriptedSource::new();
        assert!(fetch_random_word(&source, 0).is_err());
        assert!(source.requested_lengths.borrow().is_empty());
    }

    #[test]
    fn boxed_source_delegates() {
        let boxed: Box<dyn WordSource> = Box::new(EmbeddedWordSource::default());
        let word = fetch_random_word(&boxed, 5).unwrap();
        assert_eq!(word.len(), 5);
    }
}
