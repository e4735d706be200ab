//! TUI application state and logic

use super::theme::Theme;
use crate::core::MAX_WORD_LENGTH;
use crate::game::{Game, Phase, Ticker};
use crate::prefs::Preferences;
use crate::source::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// How long to wait for a key before advancing the clock
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub game: Game,
    pub source: &'a dyn WordSource,
    pub prefs: Preferences,
    pub prefs_path: Option<PathBuf>,
    pub input_mode: InputMode,
    pub length_input: String,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    WordLength,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(source: &'a dyn WordSource, prefs: Preferences, prefs_path: Option<PathBuf>) -> Self {
        Self {
            game: Game::new(prefs.word_length),
            source,
            prefs,
            prefs_path,
            input_mode: InputMode::Guess,
            length_input: String::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.prefs.dark_mode)
    }

    /// Fetch the first word
    pub fn start(&mut self) {
        self.game.load_word(self.source);
    }

    pub fn new_game(&mut self) {
        self.input_mode = InputMode::Guess;
        self.game.reset(self.source);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        self.save_prefs();
    }

    /// Apply the typed word length
    pub fn apply_word_length(&mut self) {
        let input = std::mem::take(&mut self.length_input);
        self.input_mode = InputMode::Guess;

        let Ok(length) = input.trim().parse::<usize>() else {
            self.game.report_invalid_length();
            return;
        };
        if self.game.set_word_length(length, self.source) {
            self.prefs.word_length = length;
            self.save_prefs();
        }
    }

    fn save_prefs(&self) {
        if let Some(path) = &self.prefs_path
            && let Err(e) = self.prefs.save(path)
        {
            log::warn!("Could not save preferences: {e}");
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WordLength => self.handle_length_key(key),
            InputMode::Guess if ctrl => self.handle_control_key(key),
            InputMode::Guess => self.handle_guess_key(key),
        }
    }

    fn handle_control_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('g') => {
                self.game.give_up();
            }
            KeyCode::Char('d') => self.toggle_dark_mode(),
            KeyCode::Char('l') => {
                self.length_input.clear();
                self.input_mode = InputMode::WordLength;
            }
            _ => {}
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) {
        if self.game.is_over() || self.game.phase() == Phase::NoWord {
            match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.game.type_letter(c);
            }
            KeyCode::Backspace | KeyCode::Delete => self.game.delete(),
            KeyCode::Left => self.game.move_cursor(-1),
            KeyCode::Right => self.game.move_cursor(1),
            KeyCode::Home => self.game.select(0),
            KeyCode::End => {
                let last = self.game.buffer().len().saturating_sub(1);
                self.game.select(last);
            }
            KeyCode::Enter => {
                let outcome = self.game.submit_guess(self.source);
                log::debug!("Guess submitted: {outcome:?}");
            }
            _ => {}
        }
    }

    fn handle_length_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.length_input.clear();
                self.input_mode = InputMode::Guess;
            }
            KeyCode::Char(c) if c.is_ascii_digit() && self.length_input.len() < 2 => {
                self.length_input.push(c);
            }
            KeyCode::Backspace => {
                self.length_input.pop();
            }
            KeyCode::Enter => self.apply_word_length(),
            _ => {}
        }
    }

    /// Help text for the current mode
    #[must_use]
    pub fn help_text(&self) -> String {
        match self.input_mode {
            InputMode::WordLength => format!("Length 1-{MAX_WORD_LENGTH} | Enter: apply | Esc: cancel"),
            InputMode::Guess if self.game.is_over() || self.game.phase() == Phase::NoWord => {
                "Enter/n: New Game | Esc: Quit".to_string()
            }
            InputMode::Guess => {
                "Enter: Guess | ^N: New | ^G: Give Up | ^L: Length | ^D: Theme | Esc: Quit"
                    .to_string()
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Show the loading screen before the first request blocks
    terminal.draw(|f| super::rendering::ui(f, &app))?;
    app.start();
    let mut ticker = Ticker::new();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        for _ in 0..ticker.due() {
            app.game.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn source() -> EmbeddedWordSource {
        EmbeddedWordSource::new(words_from_slice(&["gatos", "luna"]))
            .with_dictionary(&words_from_slice(&["perro"]))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn started(source: &EmbeddedWordSource) -> App<'_> {
        let mut app = App::new(source, Preferences::default(), None);
        app.start();
        app
    }

    #[test]
    fn start_loads_preferred_length() {
        let source = source();
        let app = started(&source);
        assert_eq!(app.game.phase(), Phase::Playing);
        assert_eq!(app.game.word().unwrap().text(), "GATOS");
    }

    #[test]
    fn typing_and_enter_submits_guess() {
        let source = source();
        let mut app = started(&source);
        type_str(&mut app, "perro");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.attempts(), 1);

        type_str(&mut app, "gatos");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.phase(), Phase::Won);
    }

    #[test]
    fn unknown_word_is_not_counted() {
        let source = source();
        let mut app = started(&source);
        type_str(&mut app, "xxxxx");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.attempts(), 0);
        assert!(app.game.is_shaking());
    }

    #[test]
    fn arrows_and_backspace_edit_buffer() {
        let source = source();
        let mut app = started(&source);
        type_str(&mut app, "gat");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.buffer().text(), "GA___");
        press(&mut app, KeyCode::End);
        assert_eq!(app.game.buffer().cursor(), 4);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.game.buffer().cursor(), 0);
    }

    #[test]
    fn control_keys_give_up_and_restart() {
        let source = source();
        let mut app = started(&source);
        ctrl(&mut app, 'g');
        assert_eq!(app.game.phase(), Phase::GaveUp);

        // Letters no longer type, n starts over
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game.phase(), Phase::Playing);
        assert_eq!(app.game.attempts(), 0);
    }

    #[test]
    fn toggle_dark_mode_switches_theme() {
        let source = source();
        let mut app = started(&source);
        assert_eq!(app.theme(), &Theme::LIGHT);
        ctrl(&mut app, 'd');
        assert!(app.prefs.dark_mode);
        assert_eq!(app.theme(), &Theme::DARK);
    }

    #[test]
    fn word_length_prompt_applies_new_length() {
        let source = source();
        let mut app = started(&source);
        ctrl(&mut app, 'l');
        assert_eq!(app.input_mode, InputMode::WordLength);

        // Letters are ignored in the prompt
        type_str(&mut app, "x4");
        assert_eq!(app.length_input, "4");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.prefs.word_length, 4);
        assert_eq!(app.game.word().unwrap().text(), "LUNA");
    }

    #[test]
    fn word_length_prompt_rejects_zero() {
        let source = source();
        let mut app = started(&source);
        ctrl(&mut app, 'l');
        type_str(&mut app, "0");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.prefs.word_length, 5);
        assert_eq!(app.game.word().unwrap().text(), "GATOS");
        assert!(app.game.message().is_some());
    }

    #[test]
    fn empty_length_prompt_reports_range() {
        let source = source();
        let mut app = started(&source);
        ctrl(&mut app, 'l');
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.prefs.word_length, 5);
        assert_eq!(app.game.phase(), Phase::Playing);
        assert!(app.game.message().unwrap().text.starts_with("Word length must be"));
    }

    #[test]
    fn escape_cancels_prompt_then_quits() {
        let source = source();
        let mut app = started(&source);
        ctrl(&mut app, 'l');
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let source = source();
        let mut app = started(&source);
        ctrl(&mut app, 'l');
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
