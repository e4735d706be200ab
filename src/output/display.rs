//! Display functions for the line-based game

use super::formatters::{create_progress_bar, share_summary};
use crate::core::{KEYBOARD_ROWS, LetterStatus};
use crate::game::{Game, MAX_ATTEMPTS, Message, MessageStyle, Phase};
use colored::{ColoredString, Colorize};

fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::None => text.normal(),
    }
}

/// Print every recorded guess, then empty rows up to the attempt limit
pub fn print_board(game: &Game) {
    let width = game.word().map_or(game.requested_length(), |w| w.len());

    println!();
    for attempt in game.attempt_list() {
        let row: Vec<String> = attempt
            .guess
            .text()
            .chars()
            .zip(attempt.feedback.statuses())
            .map(|(letter, &status)| tile(letter, status).to_string())
            .collect();
        println!("  {}", row.join(""));
    }
    for _ in game.attempts()..MAX_ATTEMPTS {
        println!("  {}", " _ ".repeat(width).bright_black());
    }
    println!();
}

/// Print the keyboard colored by aggregated letter status
pub fn print_keyboard(game: &Game) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| tile(char::from(letter), game.keyboard().status_of(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), keys.join(""));
    }
    println!();
}

/// Print a game message in its style
pub fn print_message(message: &Message) {
    let text = match message.style {
        MessageStyle::Info => message.text.normal(),
        MessageStyle::Success => message.text.green().bold(),
        MessageStyle::Error => message.text.red().bold(),
    };
    println!("  {text}");
}

/// Print the header line with attempts used and elapsed time
pub fn print_status(game: &Game) {
    println!(
        "  {} [{}] {}/{} ({} left)  ⏱ {}",
        "Attempts".cyan(),
        create_progress_bar(game.attempts(), MAX_ATTEMPTS, MAX_ATTEMPTS),
        game.attempts(),
        MAX_ATTEMPTS,
        game.remaining_attempts(),
        game.timer().to_string().bright_white()
    );
}

/// Print the end-of-game banner with the shareable summary
pub fn print_game_over(game: &Game) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    let banner = match game.phase() {
        Phase::Won => "  🎉 Solved! 🎉".bright_green().bold(),
        Phase::Lost => "  Out of attempts".red().bold(),
        _ => "  Game over".yellow().bold(),
    };
    println!("{banner}");
    if let Some(word) = game.word() {
        println!("  The word: {}", word.text().bright_yellow().bold());
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", share_summary(game));
}
