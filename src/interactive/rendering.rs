//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game screen.

use super::app::{App, InputMode};
use super::theme::Theme;
use crate::core::{KEYBOARD_ROWS, LetterStatus};
use crate::game::{Game, MAX_ATTEMPTS, MessageStyle, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let theme = app.theme();
    f.render_widget(Block::default().style(theme.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                        // Keyboard
            Constraint::Length(3),                        // Message / input
            Constraint::Min(1),                           // Help
        ])
        .split(f.area());

    render_header(f, app, theme, chunks[0]);
    render_board(f, &app.game, theme, chunks[1]);
    render_keyboard(f, &app.game, theme, chunks[2]);
    render_input(f, app, theme, chunks[3]);
    render_help(f, app, theme, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let game = &app.game;
    let title = Line::from(vec![
        Span::styled(
            "LETRITAS",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  |  {}  |  {}/{} ({} left)",
            game.timer(),
            game.attempts(),
            MAX_ATTEMPTS,
            game.remaining_attempts()
        )),
    ]);

    let header = Paragraph::new(title)
        .style(theme.base())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.accent)),
        );
    f.render_widget(header, area);
}

fn tile_span(letter: Option<u8>, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.map_or(' ', char::from)), style)
}

fn render_board(f: &mut Frame, game: &Game, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(theme.base());

    if game.phase() == Phase::Loading {
        let paragraph = Paragraph::new("Fetching a word...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let width = game.buffer().len();
    let empty = Style::default().fg(theme.muted);
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS);

    for attempt in game.attempt_list() {
        let spans: Vec<Span> = attempt
            .guess
            .letters()
            .iter()
            .zip(attempt.feedback.statuses())
            .map(|(&letter, &status)| tile_span(Some(letter), theme.tile(status)))
            .collect();
        lines.push(Line::from(spans));
    }

    if game.phase() == Phase::Playing {
        lines.push(current_row(game, theme));
    }

    while lines.len() < MAX_ATTEMPTS {
        lines.push(Line::from(Span::styled(" _ ".repeat(width), empty)));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(board, area);
}

/// The row being typed, with the cursor slot highlighted
fn current_row(game: &Game, theme: &Theme) -> Line<'static> {
    let buffer = game.buffer();
    let base = if game.is_shaking() {
        Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.tile(LetterStatus::None).add_modifier(Modifier::BOLD)
    };

    let spans: Vec<Span> = buffer
        .slots()
        .iter()
        .enumerate()
        .map(|(i, &slot)| {
            let style = if i == buffer.cursor() {
                base.add_modifier(Modifier::REVERSED)
            } else {
                base
            };
            match slot {
                Some(letter) => tile_span(Some(letter), style),
                None => Span::styled(" _ ", style),
            }
        })
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, game: &Game, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| tile_span(Some(letter), theme.tile(game.keyboard().status_of(letter))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(theme.base()),
        );
    f.render_widget(keyboard, area);
}

fn render_input(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let (title, content, style) = match app.input_mode {
        InputMode::WordLength => (
            " Word Length ",
            app.length_input.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        InputMode::Guess => match app.game.message() {
            Some(message) => {
                let color = match message.style {
                    MessageStyle::Info => theme.text,
                    MessageStyle::Success => theme.success,
                    MessageStyle::Error => theme.error,
                };
                (
                    " Message ",
                    message.text.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            }
            None => (" Message ", String::new(), theme.base()),
        },
    };

    let input = Paragraph::new(content)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(theme.accent).bg(theme.background)),
        );
    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let help = Paragraph::new(app.help_text())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted).bg(theme.background));
    f.render_widget(help, area);
}
