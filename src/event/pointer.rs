//! Pointer hover tracking.
//!
//! Terminals only report raw mouse positions. The tracker remembers whether
//! the pointer was inside a region and reports the edges.

use ratatui::layout::Rect;

/// Hover edge relative to a tracked region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTransition {
    Enter,
    Leave,
}

/// Turns mouse positions into enter/leave transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a pointer position; returns a transition when the pointer crossed
    /// the edge of `region`.
    pub fn update(&mut self, column: u16, row: u16, region: Rect) -> Option<PointerTransition> {
        let inside = contains(region, column, row);
        if inside == self.inside {
            return None;
        }

        self.inside = inside;
        Some(if inside {
            PointerTransition::Enter
        } else {
            PointerTransition::Leave
        })
    }

    /// The pointer left the terminal entirely.
    pub fn exit(&mut self) -> Option<PointerTransition> {
        if self.inside {
            self.inside = false;
            Some(PointerTransition::Leave)
        } else {
            None
        }
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

fn contains(region: Rect, column: u16, row: u16) -> bool {
    column >= region.left() && column < region.right() && row >= region.top() && row < region.bottom()
}
