//! Offset integrator.
//!
//! Converts frame timestamps into elapsed seconds and advances the track
//! offset at a constant rate, independent of the frame rate.

/// Default scroll speed in columns per second.
pub const DEFAULT_SPEED: f64 = 40.0;

/// Frame clock that tracks the timestamp of the previous frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
}

impl FrameClock {
    /// Create a clock that has not seen a frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp and return the seconds elapsed since the
    /// previous one.
    ///
    /// The first frame after creation or [`reset`](Self::reset) yields `0`.
    /// A timestamp older than the previous one also yields `0`, so the offset
    /// can never run backwards.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let last = self.last_timestamp_ms.replace(timestamp_ms);

        match last {
            Some(last) => {
                let dt = (timestamp_ms - last) / 1000.0;
                if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
            }
            None => 0.0,
        }
    }

    /// Forget the previous frame.
    pub fn reset(&mut self) {
        self.last_timestamp_ms = None;
    }
}

/// Advance an offset by `speed * dt`.
pub fn advance(offset: f64, speed: f64, dt_secs: f64) -> f64 {
    offset + speed * dt_secs
}
