//! Live terminal layout seen by the marquee engine.

use crate::marquee::Measure;
use crate::state::Card;
use crate::ui::widgets::StatCard;

/// Responsive gap styling of the strip container.
///
/// `wide_gap` applies once the viewport is at least `wide_breakpoint`
/// columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapStyle {
    pub gap: String,
    pub wide_gap: Option<String>,
    pub wide_breakpoint: u16,
}

impl Default for GapStyle {
    fn default() -> Self {
        Self {
            gap: "2".to_string(),
            wide_gap: Some("3".to_string()),
            wide_breakpoint: 120,
        }
    }
}

impl GapStyle {
    /// Gap style string in effect at the given viewport width.
    pub fn resolve(&self, viewport_width: u16) -> &str {
        match &self.wide_gap {
            Some(wide) if viewport_width >= self.wide_breakpoint => wide,
            _ => &self.gap,
        }
    }
}

/// Terminal layout: gap styling plus the current viewport width.
#[derive(Debug, Clone, Default)]
pub struct TerminalLayout {
    style: GapStyle,
    viewport_width: u16,
}

impl TerminalLayout {
    pub fn new(style: GapStyle, viewport_width: u16) -> Self {
        Self {
            style,
            viewport_width,
        }
    }

    /// Record a new viewport width.
    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }
}

impl Measure for TerminalLayout {
    fn computed_gap(&self) -> Option<String> {
        Some(self.style.resolve(self.viewport_width).to_string())
    }

    fn width_of(&self, card: &Card) -> Option<f64> {
        Some(f64::from(StatCard::width(card)))
    }
}
