//! Event handling for the stats marquee.
//!
//! Terminal input and the animation frame clock are collected into one
//! stream of [`Event`]s. Frames are produced by a dedicated clock task rather
//! than by input polling, so the animation keeps its rate while the terminal
//! is idle.

pub mod handler;
pub mod pointer;

pub use handler::EventHandler;
pub use pointer::{PointerTracker, PointerTransition};

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use eyre::Result;

/// Default terminal polling interval.
pub const DEFAULT_POLL_RATE: Duration = Duration::from_millis(50);

/// Default animation frame rate.
pub const DEFAULT_FRAME_RATE_HZ: u32 = 60;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Mouse movement or button event
    Mouse(MouseEvent),
    /// Terminal lost focus
    FocusLost,
    /// Terminal resize event
    Resize(u16, u16),
    /// Animation frame, milliseconds since the frame clock started
    Frame(f64),
}

/// Event dispatcher that collects terminal events.
pub struct EventDispatcher {
    /// Polling interval
    poll_rate: Duration,
}

impl EventDispatcher {
    /// Create a new event dispatcher with the default poll rate.
    pub fn new() -> Self {
        Self {
            poll_rate: DEFAULT_POLL_RATE,
        }
    }

    /// Wait up to one poll interval for the next terminal event.
    pub fn next(&self) -> Result<Option<Event>> {
        if !event::poll(self.poll_rate)? {
            return Ok(None);
        }

        let event = match event::read()? {
            CrosstermEvent::Key(key) => Some(Event::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            CrosstermEvent::FocusLost => Some(Event::FocusLost),
            _ => None,
        };
        Ok(event)
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Interval between frames at `frame_rate_hz`; a zero rate is treated as 1 Hz.
pub fn frame_interval(frame_rate_hz: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(frame_rate_hz.max(1)))
}
