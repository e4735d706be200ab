//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any entry
/// outside the A–Z alphabet.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letritas::wordlists::loader::load_from_file;
///
/// let words = load_from_file("palabras.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse newline-separated words, skipping invalid entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use letritas::wordlists::loader::words_from_slice;
/// use letritas::wordlists::FALLBACK_WORDS;
///
/// let words = words_from_slice(FALLBACK_WORDS);
/// assert_eq!(words.len(), FALLBACK_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["perro", "sol", "mariposa"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "PERRO");
        assert_eq!(words[1].text(), "SOL");
        assert_eq!(words[2].text(), "MARIPOSA");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["perro", "niño", "", "g4to", "queso"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "PERRO");
        assert_eq!(words[1].text(), "QUESO");
    }

    #[test]
    fn parse_word_list_skips_blank_lines() {
        let words = parse_word_list("gatos\n\n  limon  \r\nsaltó\nraton\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["GATOS", "LIMON", "RATON"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let path = std::env::temp_dir().join("letritas-missing-dictionary.txt");
        assert!(load_from_file(path).is_err());
    }
}
