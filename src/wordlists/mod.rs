//! Word lists for offline play
//!
//! Provides the embedded fallback answers and a loader for dictionary files.

mod embedded;
pub mod loader;

pub use embedded::FALLBACK_WORDS;
