//! Application state management.
//!
//! The state owns the marquee engine together with the live terminal layout
//! it measures against, so both are always updated in one place.

mod card;

pub use card::{default_cards, seed_track, Card, Icon};

use crate::event::{PointerTracker, PointerTransition};
use crate::marquee::{Marquee, MarqueeConfig, RecycleReport};
use crate::ui::layout::{GapStyle, TerminalLayout};

/// Application state.
#[derive(Debug)]
pub struct AppState {
    /// Marquee engine.
    pub marquee: Marquee,
    /// Live layout the engine measures against.
    pub layout: TerminalLayout,
    /// Base card sequence used when mounting.
    pub base_cards: Vec<Card>,
    /// Hover tracking over the strip.
    pub pointer: PointerTracker,
}

impl AppState {
    /// Create state for a viewport `viewport_width` columns wide.
    pub fn new(
        config: MarqueeConfig,
        base_cards: Vec<Card>,
        gap_style: GapStyle,
        viewport_width: u16,
    ) -> Self {
        Self {
            marquee: Marquee::new(config),
            layout: TerminalLayout::new(gap_style, viewport_width),
            base_cards,
            pointer: PointerTracker::new(),
        }
    }

    /// Mount the marquee against the current layout.
    ///
    /// A fresh mount starts running, so hover tracking starts outside too.
    pub fn mount(&mut self) {
        self.pointer = PointerTracker::new();
        self.marquee.mount(&self.base_cards, &self.layout);
    }

    pub fn unmount(&mut self) {
        self.marquee.unmount();
    }

    /// Advance the marquee to `timestamp_ms`.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<RecycleReport> {
        self.marquee.frame(timestamp_ms, &self.layout)
    }

    /// Record a new viewport size and re-measure the gap.
    pub fn resize(&mut self, width: u16) {
        self.layout.set_viewport_width(width);
        self.marquee.resize(&self.layout);
    }

    /// Apply a hover transition to the marquee.
    pub fn apply_pointer(&mut self, transition: PointerTransition) {
        match transition {
            PointerTransition::Enter => self.marquee.pointer_enter(),
            PointerTransition::Leave => self.marquee.pointer_leave(),
        }
    }
}
