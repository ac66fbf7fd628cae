//! Stat card widget.
//!
//! A single tile on the marquee: rounded border with the icon badge in the
//! top-right corner, an uppercase caption and the headline value underneath.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Padding, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::state::Card;

/// Rows taken by a card: two borders, caption and value.
pub const CARD_HEIGHT: u16 = 4;
/// Narrowest card, wide enough for the badge and a short caption.
pub const CARD_MIN_WIDTH: u16 = 12;
/// Widest card; longer captions are truncated.
pub const CARD_MAX_WIDTH: u16 = 512;
/// Blank columns between the border and the text on each side.
const CARD_PADDING: u16 = 1;

/// Widget rendering one [`Card`].
pub struct StatCard<'a> {
    card: &'a Card,
    border_style: Style,
    badge_style: Style,
    label_style: Style,
    value_style: Style,
}

impl<'a> StatCard<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            border_style: Style::default().fg(Color::Blue),
            badge_style: Style::default().fg(Color::Yellow),
            label_style: Style::default().fg(Color::White),
            value_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn badge_style(mut self, style: Style) -> Self {
        self.badge_style = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    /// Rendered width of a card in columns.
    pub fn width(card: &Card) -> u16 {
        let label = caption(card).width();
        let value = card.value.width();
        let content = u16::try_from(label.max(value)).unwrap_or(u16::MAX);

        content
            .saturating_add(2 * CARD_PADDING + 2)
            .clamp(CARD_MIN_WIDTH, CARD_MAX_WIDTH)
    }
}

fn caption(card: &Card) -> String {
    card.label.to_uppercase()
}

impl<'a> Widget for StatCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let badge = Title::from(Span::styled(self.card.icon.glyph(), self.badge_style))
            .alignment(Alignment::Right);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .padding(Padding::horizontal(CARD_PADDING))
            .title(badge);

        let text = vec![
            Line::from(Span::styled(caption(self.card), self.label_style)),
            Line::from(Span::styled(self.card.value.clone(), self.value_style)),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
