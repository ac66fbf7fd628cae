//! UI theme definition.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the application UI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Basic styles
    pub normal_text: Style,
    pub block_style: Style,
    pub header_style: Style,
    pub subtitle_style: Style,

    // Card styles
    pub card_border: Style,
    pub card_badge: Style,
    pub label_style: Style,
    pub value_style: Style,

    // Status styles
    pub help_style: Style,
    pub status_live: Style,
    pub status_paused: Style,

    // Key styles
    pub key_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Basic styles
            normal_text: Style::default().fg(Color::White),
            block_style: Style::default(),
            header_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(Color::Gray),

            // Card styles
            card_border: Style::default().fg(Color::LightBlue),
            card_badge: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::White),
            value_style: Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),

            // Status styles
            help_style: Style::default().fg(Color::Gray),
            status_live: Style::default().fg(Color::Green),
            status_paused: Style::default().fg(Color::Yellow),

            // Key styles
            key_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        }
    }
}
