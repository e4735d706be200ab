//! Formatting utilities for terminal output

use crate::game::{Game, MAX_ATTEMPTS, Phase};

/// Shareable summary of a finished game
///
/// The first line reads `Letritas 3/6 00:42.7` (or `X/6` when the game was not
/// won), followed by one emoji row per guess.
#[must_use]
pub fn share_summary(game: &Game) -> String {
    let score = if game.phase() == Phase::Won {
        game.attempts().to_string()
    } else {
        "X".to_string()
    };

    let mut summary = format!("Letritas {score}/{MAX_ATTEMPTS} {}", game.timer());
    for attempt in game.attempt_list() {
        summary.push('\n');
        summary.push_str(&attempt.feedback.to_emoji());
    }
    summary
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
