//! Letritas
//!
//! A Wordle-style word guessing game for the terminal. Words come from a
//! remote word API, with an embedded word list for offline play.
//!
//! # Quick Start
//!
//! ```rust
//! use letritas::core::{Feedback, LetterStatus, Word};
//! use letritas::game::{Game, Phase};
//! use letritas::source::EmbeddedWordSource;
//!
//! // Score a guess
//! let guess = Word::new("gatas").unwrap();
//! let answer = Word::new("gatos").unwrap();
//! let feedback = Feedback::calculate(&guess, &answer);
//! assert_eq!(feedback.status_at(3), LetterStatus::Absent);
//!
//! // Play a game offline
//! let source = EmbeddedWordSource::default();
//! let mut game = Game::new(5);
//! game.load_word(&source);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word API and offline sources
pub mod source;

// Word lists
pub mod wordlists;

// Persisted preferences
pub mod prefs;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
