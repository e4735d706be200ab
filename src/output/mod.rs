//! Terminal output formatting
//!
//! Display utilities for the line-based game and shareable summaries.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_keyboard, print_message, print_status};
pub use formatters::share_summary;
