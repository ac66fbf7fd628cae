//! Pause/resume controller driven by pointer hover.

/// Playback state of the marquee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Playback {
    /// Offset advances and cards recycle.
    #[default]
    Running,
    /// Offset and track are frozen.
    Paused,
}

impl Playback {
    /// Pointer entered the strip.
    pub fn pointer_enter(&mut self) {
        *self = Playback::Paused;
    }

    /// Pointer left the strip.
    pub fn pointer_leave(&mut self) {
        *self = Playback::Running;
    }

    pub fn is_paused(self) -> bool {
        self == Playback::Paused
    }

    pub fn label(self) -> &'static str {
        match self {
            Playback::Running => "RUNNING",
            Playback::Paused => "PAUSED",
        }
    }
}
