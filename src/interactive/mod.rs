//! Full-screen terminal game
//!
//! Board, keyboard and timer rendered with ratatui over crossterm.

pub mod app;
pub mod rendering;
pub mod theme;

pub use app::{App, InputMode, run_tui};
pub use theme::Theme;
