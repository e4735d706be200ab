//! Simple line-based game mode
//!
//! Text-based game without the full-screen TUI

use crate::game::{Game, SubmitOutcome, Ticker};
use crate::output::{
    print_board, print_game_over, print_keyboard, print_message, print_status, share_summary,
};
use crate::prefs::Preferences;
use crate::source::WordSource;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    New,
    GiveUp,
    Length(usize),
    Share,
    Help,
    Guess(String),
    Invalid(String),
}

impl Command {
    /// Parse a line of input
    ///
    /// Lines starting with `:` are commands; anything else is a guess.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let Some(command) = input.strip_prefix(':') else {
            return Self::Guess(input.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit" | "exit"), None) => Self::Quit,
            (Some("n" | "new"), None) => Self::New,
            (Some("g" | "giveup" | "give-up"), None) => Self::GiveUp,
            (Some("s" | "share"), None) => Self::Share,
            (Some("h" | "help"), None) => Self::Help,
            (Some("l" | "length"), Some(n)) => n
                .parse()
                .map_or_else(|_| Self::Invalid(input.to_string()), Self::Length),
            _ => Self::Invalid(input.to_string()),
        }
    }
}

fn print_help() {
    println!("Type a word and press Enter to guess.");
    println!("Commands:");
    println!("  :new        start a new game");
    println!("  :giveup     reveal the word");
    println!("  :length N   play with N-letter words");
    println!("  :share      print the result grid");
    println!("  :quit       exit\n");
}

/// Run `action` behind a spinner
fn with_spinner<T>(message: &str, action: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = action();
    spinner.finish_and_clear();
    result
}

/// Run the simple line-based game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading player input.
pub fn run_simple<S: WordSource + ?Sized>(
    source: &S,
    prefs: &mut Preferences,
    prefs_path: &Path,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Letritas - Simple Mode        ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help();

    let mut game = Game::new(prefs.word_length);
    with_spinner("Fetching a word...", || game.load_word(source));
    let mut ticker = Ticker::new();

    loop {
        print_status(&game);
        print_board(&game);
        print_keyboard(&game);
        if let Some(message) = game.message() {
            print_message(message);
        }

        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let elapsed = ticker.due();
        let command = Command::parse(&input);
        if !matches!(command, Command::Guess(_)) {
            advance(&mut game, elapsed);
        }

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                with_spinner("Fetching a word...", || game.reset(source));
                ticker = Ticker::new();
            }
            Command::GiveUp => {
                if game.give_up() {
                    print_game_over(&game);
                }
            }
            Command::Length(length) => {
                let changed =
                    with_spinner("Fetching a word...", || game.set_word_length(length, source));
                if changed {
                    prefs.word_length = length;
                    if let Err(e) = prefs.save(prefs_path) {
                        log::warn!("Could not save preferences: {e}");
                    }
                }
                ticker = Ticker::new();
            }
            Command::Share => {
                if game.is_over() {
                    println!("\n{}\n", share_summary(&game));
                } else {
                    println!("Finish the game first.\n");
                }
            }
            Command::Help => print_help(),
            Command::Invalid(text) => println!("Unknown command: {text}\n"),
            Command::Guess(word) => {
                if game.is_over() {
                    println!("Game over. Type :new to play again.\n");
                    continue;
                }
                let width = game.buffer().len();
                if word.chars().count() > width {
                    println!("The word has {width} letters.\n");
                    continue;
                }
                type_guess(&mut game, &word, elapsed);
                let outcome = with_spinner("Checking...", || game.submit_guess(source));
                if matches!(outcome, SubmitOutcome::Won | SubmitOutcome::Lost) {
                    print_board(&game);
                    print_game_over(&game);
                }
            }
        }
    }
}

/// Apply `ticks` of elapsed time to the clock
fn advance(game: &mut Game, ticks: u32) {
    for _ in 0..ticks {
        game.tick();
    }
}

/// Fill the guess row with `word`, then count the `elapsed` ticks spent typing it
///
/// Typing starts the clock, so the time at the prompt counts even for the first guess.
fn type_guess(game: &mut Game, word: &str, elapsed: u32) {
    game.clear_guess();
    for c in word.chars() {
        game.type_letter(c);
    }
    advance(game, elapsed);
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use crate::source::EmbeddedWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn playing() -> Game {
        let source = EmbeddedWordSource::new(words_from_slice(&["gatos"]));
        let mut game = Game::new(5);
        game.load_word(&source);
        assert_eq!(game.phase(), Phase::Playing);
        game
    }

    #[test]
    fn first_guess_counts_typing_time() {
        let mut game = playing();
        type_guess(&mut game, "gatas", 23);
        assert_eq!(game.buffer().text(), "GATAS");
        assert_eq!(game.timer().tenths(), 23);
    }

    #[test]
    fn idle_time_before_first_letter_is_not_counted() {
        let mut game = playing();
        advance(&mut game, 40);
        assert_eq!(game.timer().tenths(), 0);
    }

    #[test]
    fn retyping_replaces_previous_letters() {
        let mut game = playing();
        type_guess(&mut game, "perro", 5);
        type_guess(&mut game, "gat", 5);
        assert_eq!(game.buffer().text(), "GAT__");
        assert_eq!(game.timer().tenths(), 10);
    }

    #[test]
    fn parses_guess() {
        assert_eq!(Command::parse(" gatos \n"), Command::Guess("gatos".into()));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":new"), Command::New);
        assert_eq!(Command::parse(":giveup"), Command::GiveUp);
        assert_eq!(Command::parse(":share"), Command::Share);
        assert_eq!(Command::parse(":help"), Command::Help);
        assert_eq!(Command::parse(":length 4"), Command::Length(4));
        assert_eq!(Command::parse(":l 7"), Command::Length(7));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(
            Command::parse(":length four"),
            Command::Invalid(":length four".into())
        );
        assert_eq!(Command::parse(":length"), Command::Invalid(":length".into()));
        assert_eq!(Command::parse(":new now"), Command::Invalid(":new now".into()));
        assert_eq!(Command::parse(":dance"), Command::Invalid(":dance".into()));
    }
}
