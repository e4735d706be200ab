//! Game session state
//!
//! The guess buffer, the timer and the state machine that ties them to a
//! word source. Nothing here touches the terminal.

mod buffer;
mod state;
mod timer;

pub use buffer::GuessBuffer;
pub use state::{
    Attempt, Game, MAX_ATTEMPTS, Message, MessageStyle, Phase, SHAKE_TICKS, SubmitOutcome,
};
pub use timer::{Ticker, Timer};
