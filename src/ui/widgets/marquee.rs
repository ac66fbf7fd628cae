//! Marquee strip widget.
//!
//! Paints the track at the engine's current offset. Cards that straddle an
//! edge are drawn into a scratch buffer and copied column by column, so they
//! slide in and out of view instead of popping.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::marquee::{measure, Marquee, Measure};
use crate::ui::widgets::stat_card::{StatCard, CARD_HEIGHT};
use crate::ui::Theme;

/// Default share of the strip width dimmed on each edge.
pub const DEFAULT_EDGE_FADE: f64 = 0.18;

/// Widget rendering a mounted [`Marquee`].
pub struct MarqueeStrip<'a, M: Measure + ?Sized> {
    marquee: &'a Marquee,
    layout: &'a M,
    theme: Option<&'a Theme>,
    edge_fade: f64,
}

impl<'a, M: Measure + ?Sized> MarqueeStrip<'a, M> {
    pub fn new(marquee: &'a Marquee, layout: &'a M) -> Self {
        Self {
            marquee,
            layout,
            theme: None,
            edge_fade: DEFAULT_EDGE_FADE,
        }
    }

    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Share of the width dimmed on each side, clamped to `[0, 0.5]`.
    pub fn edge_fade(mut self, fraction: f64) -> Self {
        self.edge_fade = if fraction.is_finite() {
            fraction.clamp(0.0, 0.5)
        } else {
            0.0
        };
        self
    }

    fn card_widget(&self, card: &'a crate::state::Card) -> StatCard<'a> {
        let widget = StatCard::new(card);
        match self.theme {
            Some(theme) => widget
                .border_style(theme.card_border)
                .badge_style(theme.card_badge)
                .label_style(theme.label_style)
                .value_style(theme.value_style),
            None => widget,
        }
    }

    fn fade_edges(&self, area: Rect, buf: &mut Buffer) {
        let fade = (f64::from(area.width) * self.edge_fade).round() as u16;
        if fade == 0 {
            return;
        }

        let dim = Style::default().add_modifier(Modifier::DIM);
        let right_start = area.width.saturating_sub(fade);
        for y in area.top()..area.bottom() {
            for x in (0..fade).chain(right_start..area.width) {
                buf.get_mut(area.x + x, y).set_style(dim);
            }
        }
    }
}

impl<'a, M: Measure + ?Sized> Widget for MarqueeStrip<'a, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(state) = self.marquee.state() else {
            return;
        };
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cards = self.marquee.cards();
        let width_of = |id: crate::marquee::CardId| match cards.get(id.0) {
            Some(card) => measure::width_of(self.layout, card),
            None => 0.0,
        };
        let height = CARD_HEIGHT.min(area.height);

        for (id, start) in state.positions(width_of) {
            let Some(card) = cards.get(id.0) else {
                continue;
            };
            let width = StatCard::width(card);
            let start = start.round() as i64;
            let end = start + i64::from(width);

            if end <= 0 || start >= i64::from(area.width) {
                continue;
            }

            let scratch_area = Rect::new(0, 0, width, height);
            let mut scratch = Buffer::empty(scratch_area);
            self.card_widget(card).render(scratch_area, &mut scratch);

            // Rect::new shrinks oversized areas, so copy from what was allocated
            for cx in 0..scratch.area.width {
                let sx = start + i64::from(cx);
                if sx < 0 || sx >= i64::from(area.width) {
                    continue;
                }
                for cy in 0..scratch.area.height {
                    *buf.get_mut(area.x + sx as u16, area.y + cy) = scratch.get(cx, cy).clone();
                }
            }
        }

        self.fade_edges(area, buf);
    }
}
