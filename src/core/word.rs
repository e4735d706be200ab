//! Game word representation
//!
//! A Word stores an uppercase A–Z word of any length up to [`MAX_WORD_LENGTH`].

use rustc_hash::FxHashMap;
use std::fmt;

/// Longest word the game will accept from a source or a player
pub const MAX_WORD_LENGTH: usize = 12;

/// An uppercase game word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be between 1 and {MAX_WORD_LENGTH} letters, got {len}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only letters A-Z"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is 0 or above [`MAX_WORD_LENGTH`]
    /// - Contains non-ASCII characters (including `Ñ`)
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use letritas::core::Word;
    ///
    /// let word = Word::new("gatos").unwrap();
    /// assert_eq!(word.text(), "GATOS");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("g4tos").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word in the lowercase form the word API expects
    #[must_use]
    pub fn to_query(&self) -> String {
        self.text.to_ascii_lowercase()
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for letter in self.text.bytes() {
            *counts.entry(letter).or_default() += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("GATOS").unwrap();
        assert_eq!(word.text(), "GATOS");
        assert_eq!(word.letters(), b"GATOS");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("perro").unwrap().text(), "PERRO");
        assert_eq!(Word::new("PeRrO").unwrap().text(), "PERRO");
        assert_eq!(Word::new("  sol \n").unwrap().text(), "SOL");
    }

    #[test]
    fn word_creation_variable_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("sol").unwrap().len(), 3);
        assert_eq!(Word::new("murcielagos").unwrap().len(), 11);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("abcdefghijklm"),
            Err(WordError::InvalidLength(13))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(Word::new("cañon"), Err(WordError::NonAscii)));
        assert!(matches!(
            Word::new("gat0s"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("ga tos").is_err());
        assert!(Word::new("gatos!").is_err());
    }

    #[test]
    fn word_query_is_lowercase() {
        let word = Word::new("Limon").unwrap();
        assert_eq!(word.to_query(), "limon");
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("besos").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&2));
        assert_eq!(counts.get(&b'B'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("piano").unwrap();
        assert_eq!(format!("{word}"), "PIANO");
    }
}
