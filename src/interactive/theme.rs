//! Light and dark color palettes

use crate::core::LetterStatus;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub correct: Color,
    pub present: Color,
    pub absent: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub const LIGHT: Self = Self {
        background: Color::White,
        text: Color::Black,
        accent: Color::Blue,
        muted: Color::Gray,
        correct: Color::Green,
        present: Color::Yellow,
        absent: Color::DarkGray,
        error: Color::Red,
        success: Color::Green,
    };

    pub const DARK: Self = Self {
        background: Color::Black,
        text: Color::White,
        accent: Color::Cyan,
        muted: Color::DarkGray,
        correct: Color::LightGreen,
        present: Color::LightYellow,
        absent: Color::Gray,
        error: Color::LightRed,
        success: Color::LightGreen,
    };

    #[must_use]
    pub const fn for_mode(dark_mode: bool) -> &'static Self {
        if dark_mode { &Self::DARK } else { &Self::LIGHT }
    }

    /// Base style for the whole screen
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Tile style for a letter with the given status
    #[must_use]
    pub fn tile(&self, status: LetterStatus) -> Style {
        match status {
            LetterStatus::Correct => Style::default()
                .fg(Color::Black)
                .bg(self.correct)
                .add_modifier(Modifier::BOLD),
            LetterStatus::Present => Style::default()
                .fg(Color::Black)
                .bg(self.present)
                .add_modifier(Modifier::BOLD),
            LetterStatus::Absent => Style::default().fg(self.background).bg(self.absent),
            LetterStatus::None => self.base(),
        }
    }
}
