//! One-shot word API commands

use crate::core::{MAX_WORD_LENGTH, Word, WordError};
use crate::error::SourceError;
use crate::source::{WordSource, fetch_random_word};

/// Errors from a lookup command
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("word length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    InvalidLength(usize),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Fetch one word of `length` letters, falling back to shorter lengths
///
/// # Errors
///
/// Returns `LookupError::InvalidLength` when `length` is outside `1..=MAX_WORD_LENGTH`,
/// or a source error when no word is available at any length.
pub fn random_word<S: WordSource + ?Sized>(source: &S, length: usize) -> Result<Word, LookupError> {
    if !(1..=MAX_WORD_LENGTH).contains(&length) {
        return Err(LookupError::InvalidLength(length));
    }
    Ok(fetch_random_word(source, length)?)
}

/// Check whether `text` is a word
///
/// # Errors
///
/// Returns an error if `text` is not a valid game word or the check fails.
pub fn check_word<S: WordSource + ?Sized>(source: &S, text: &str) -> Result<bool, LookupError> {
    let word = Word::new(text)?;
    Ok(source.word_exists(&word)?)
}
