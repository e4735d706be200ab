//! Elapsed game time in tenths of a second

use std::fmt;
use std::time::Instant;

/// Stopwatch driven by an external tick source
///
/// Each [`Timer::tick`] counts one tenth of a second while running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    tenths: u32,
    running: bool,
}

impl Timer {
    /// Duration of one tick
    pub const TICK: std::time::Duration = std::time::Duration::from_millis(100);

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero the timer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tick(&mut self) {
        if self.running {
            self.tenths = self.tenths.saturating_add(1);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn tenths(&self) -> u32 {
        self.tenths
    }
}

impl fmt::Display for Timer {
    /// Formats as `MM:SS.d`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.tenths / 600;
        let seconds = (self.tenths / 10) % 60;
        let tenths = self.tenths % 10;
        write!(f, "{minutes:02}:{seconds:02}.{tenths}")
    }
}

/// Wall-clock tick source
///
/// Converts real elapsed time into whole [`Timer::TICK`] steps, carrying the
/// remainder over to the next call.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    last: Instant,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Number of ticks that elapsed since the previous call
    pub fn due(&mut self) -> u32 {
        let ticks = (self.last.elapsed().as_millis() / Timer::TICK.as_millis()) as u32;
        self.last += Timer::TICK * ticks;
        ticks
    }
}
