//! Seamless marquee engine.
//!
//! The engine scrolls a strip of variable-width cards forever without ever
//! snapping the offset back. Each frame:
//!
//! 1. the [`FrameClock`] turns the frame timestamp into elapsed seconds,
//! 2. the offset advances at a constant speed (skipped while paused),
//! 3. the recycler moves tail cards to the head while the offset is positive.
//!
//! The per-frame work is the pure [`step`] function; [`Marquee`] wraps it with
//! the mount lifecycle, the frame clock and the hover controller.

pub mod integrator;
pub mod measure;
pub mod pause;
pub mod recycler;
pub mod track;

pub use integrator::{FrameClock, DEFAULT_SPEED};
pub use measure::{parse_gap, Gap, Measure};
pub use pause::Playback;
pub use recycler::{RecycleReport, MAX_RECYCLES_PER_FRAME};
pub use track::{CardId, Track};

use crate::state::{seed_track, Card};

/// Tuning for the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    /// Scroll speed in columns per second.
    pub speed: f64,
    /// Safety bound on recycles per frame.
    pub max_recycles_per_frame: usize,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            max_recycles_per_frame: MAX_RECYCLES_PER_FRAME,
        }
    }
}

/// Mutable state of a mounted marquee.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    /// Horizontal translation of the track, in columns.
    pub offset: f64,
    /// Cached gap between cards.
    pub gap: Gap,
    /// Current card order.
    pub track: Track,
}

impl MarqueeState {
    /// Fresh state at offset zero.
    pub fn new(track: Track, gap: Gap) -> Self {
        Self {
            offset: 0.0,
            gap,
            track,
        }
    }

    /// On-screen start column of every card, head first.
    ///
    /// Card `i` starts at `offset + Σ(width_j + gap)` over the cards before it.
    pub fn positions<F>(&self, mut width_of: F) -> Vec<(CardId, f64)>
    where
        F: FnMut(CardId) -> f64,
    {
        let mut x = self.offset;
        self.track
            .iter()
            .map(|id| {
                let start = x;
                x += width_of(id) + self.gap.get();
                (id, start)
            })
            .collect()
    }
}

/// Advance the marquee by one frame.
///
/// While `paused` the state is returned untouched. Otherwise the offset is
/// integrated first and the recycler runs on the result, so a long frame
/// recycles as many cards as the distance covered.
pub fn step<F>(
    mut state: MarqueeState,
    dt_secs: f64,
    paused: bool,
    config: &MarqueeConfig,
    width_of: F,
) -> (MarqueeState, RecycleReport)
where
    F: FnMut(CardId) -> f64,
{
    if paused {
        let report = RecycleReport {
            offset: state.offset,
            ..RecycleReport::default()
        };
        return (state, report);
    }

    let offset = integrator::advance(state.offset, config.speed, dt_secs);
    let report = recycler::recycle(
        &mut state.track,
        offset,
        state.gap.get(),
        config.max_recycles_per_frame,
        width_of,
    );
    state.offset = report.offset;

    (state, report)
}

/// Marquee engine bound to a host layout.
///
/// Every operation is a no-op while the engine is not mounted.
#[derive(Debug, Clone, Default)]
pub struct Marquee {
    config: MarqueeConfig,
    cards: Vec<Card>,
    state: Option<MarqueeState>,
    clock: FrameClock,
    playback: Playback,
    total_recycled: u64,
}

impl Marquee {
    /// Create an unmounted engine.
    pub fn new(config: MarqueeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Seed the track with two copies of `base`, reset the offset and clock,
    /// and measure the gap.
    pub fn mount<M: Measure + ?Sized>(&mut self, base: &[Card], layout: &M) {
        self.cards = seed_track(base);
        let gap = Gap::measure(layout);
        let track = Track::sequential(self.cards.len());
        let cards = track.len();
        self.state = Some(MarqueeState::new(track, gap));
        self.clock.reset();
        self.playback = Playback::Running;
        self.total_recycled = 0;

        tracing::debug!(cards, gap = gap.get(), "marquee mounted");
    }

    /// Drop the mounted state.
    pub fn unmount(&mut self) {
        if self.state.take().is_some() {
            self.clock.reset();
            tracing::debug!(recycled = self.total_recycled, "marquee unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_some()
    }

    /// Run one animation frame at `timestamp_ms`.
    ///
    /// The clock is ticked even while paused so that resuming does not
    /// integrate the paused interval.
    pub fn frame<M: Measure + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        layout: &M,
    ) -> Option<RecycleReport> {
        let state = self.state.take()?;
        let dt = self.clock.tick(timestamp_ms);

        let cards = &self.cards;
        let (state, report) = step(
            state,
            dt,
            self.playback.is_paused(),
            &self.config,
            |id| match cards.get(id.0) {
                Some(card) => measure::width_of(layout, card),
                None => 0.0,
            },
        );

        if report.hit_bound {
            tracing::debug!(
                offset = report.offset,
                recycled = report.recycled,
                "recycle bound reached, resuming next frame"
            );
        }

        self.state = Some(state);
        self.total_recycled += report.recycled as u64;
        Some(report)
    }

    /// Re-measure the gap after a viewport change. Offset and order are kept.
    pub fn resize<M: Measure + ?Sized>(&mut self, layout: &M) {
        if let Some(state) = self.state.as_mut() {
            state.gap = Gap::measure(layout);
            tracing::debug!(gap = state.gap.get(), "marquee gap re-measured");
        }
    }

    pub fn pointer_enter(&mut self) {
        self.playback.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.playback.pointer_leave();
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn state(&self) -> Option<&MarqueeState> {
        self.state.as_ref()
    }

    /// The seeded card list, indexed by [`CardId`].
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of distinct stats, not counting the seeded copies.
    pub fn stat_count(&self) -> usize {
        self.cards.iter().filter(|card| !card.duplicate).count()
    }

    /// Cards recycled since mount.
    pub fn total_recycled(&self) -> u64 {
        self.total_recycled
    }
}
