//! Letritas - CLI
//!
//! Wordle-style word game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letritas::{
    commands::{check_word, random_word, run_simple},
    prefs::{DEFAULT_PREFS_FILE, Preferences},
    source::{DEFAULT_API_URL, EmbeddedWordSource, HttpWordSource, WordSource},
    wordlists::loader::load_from_file,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "letritas",
    about = "Guess the hidden word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length for this session (saved as the new preference)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Word API endpoint
    #[arg(long, global = true, env = "LETRITAS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "5")]
    timeout_secs: u64,

    /// Play with the built-in word list instead of the word API
    #[arg(long, global = true)]
    offline: bool,

    /// Dictionary file (one word per line) for offline guess checks; implies --offline
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Preferences file
    #[arg(long, global = true, default_value = DEFAULT_PREFS_FILE)]
    prefs: PathBuf,

    /// Use the dark theme (saved as the new preference)
    #[arg(long, global = true)]
    dark: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Fetch a random word and print it
    Word {
        /// Number of letters (defaults to the preferred length)
        #[arg(short = 'n', long)]
        letters: Option<usize>,
    },

    /// Check whether a word exists
    Check {
        /// The word to check
        word: String,
    },
}

/// Send logs to `path`; without a file logging stays off
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file '{}'", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Load preferences and apply command-line overrides
fn load_preferences(cli: &Cli) -> Result<Preferences> {
    let mut prefs = Preferences::load_or_default(&cli.prefs).unwrap_or_else(|e| {
        log::warn!("Ignoring preferences: {e}");
        eprintln!("Warning: {e}, using defaults");
        Preferences::default()
    });

    let mut changed = false;
    if let Some(length) = cli.length {
        prefs.word_length = length;
        changed = true;
    }
    if cli.dark && !prefs.dark_mode {
        prefs.dark_mode = true;
        changed = true;
    }

    prefs.validate()?;
    if changed && let Err(e) = prefs.save(&cli.prefs) {
        log::warn!("Could not save preferences: {e}");
    }
    Ok(prefs)
}

/// Build the word source selected by the flags
fn build_source(cli: &Cli) -> Result<Box<dyn WordSource>> {
    if cli.offline || cli.dictionary.is_some() {
        let mut source = EmbeddedWordSource::default();
        if let Some(path) = &cli.dictionary {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read dictionary '{}'", path.display()))?;
            log::info!("Loaded {} dictionary words from {}", words.len(), path.display());
            source = source.with_dictionary(&words);
        }
        log::info!("Playing offline");
        return Ok(Box::new(source));
    }

    let source = HttpWordSource::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))
        .with_context(|| format!("Invalid API URL '{}'", cli.api_url))?;
    log::info!("Using word API at {}", source.endpoint());
    Ok(Box::new(source))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut prefs = load_preferences(&cli)?;
    let source = build_source(&cli)?;

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(source.as_ref(), prefs, cli.prefs.clone()),
        Commands::Simple => run_simple(source.as_ref(), &mut prefs, &cli.prefs),
        Commands::Word { letters } => {
            let word = random_word(source.as_ref(), letters.unwrap_or(prefs.word_length))?;
            println!("{word}");
            Ok(())
        }
        Commands::Check { word } => run_check_command(source.as_ref(), word),
    }
}

fn run_check_command(source: &dyn WordSource, word: &str) -> Result<()> {
    if check_word(source, word)? {
        println!("{} exists", word.to_uppercase());
    } else {
        println!("{} does not exist", word.to_uppercase());
    }
    Ok(())
}

fn run_play_command(source: &dyn WordSource, prefs: Preferences, prefs_path: PathBuf) -> Result<()> {
    use letritas::interactive::{App, run_tui};

    let app = App::new(source, prefs, Some(prefs_path));
    run_tui(app)
}
