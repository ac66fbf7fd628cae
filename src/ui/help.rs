//! Help overlay showing keyboard shortcuts and pointer behavior.

use ratatui::Frame;
use ratatui::layout::{Rect, Alignment};
use ratatui::widgets::{Block, Borders, Paragraph, Clear};
use ratatui::style::{Style, Modifier};
use ratatui::text::{Line, Span};

use crate::ui::Theme;

/// Help overlay showing keyboard shortcuts and usage information.
pub struct HelpView;

impl HelpView {
    /// Render the help overlay
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = Self::centered_rect(60, 50, area);

        // Clear the background
        frame.render_widget(Clear, popup_area);

        let help_block = Block::default()
            .title("Stats Marquee Help")
            .borders(Borders::ALL)
            .style(theme.block_style);

        let help_text = vec![
            Line::from(vec![
                Span::styled("Shortcuts", Style::default().add_modifier(Modifier::BOLD))
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("q / Esc / Ctrl-C", theme.key_style),
                Span::raw(" - Quit"),
            ]),
            Line::from(vec![
                Span::styled("? / F1", theme.key_style),
                Span::raw(" - Toggle this help screen"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Pointer", Style::default().add_modifier(Modifier::BOLD))
            ]),
            Line::from(""),
            Line::from("Hover over the cards to pause the strip, move away to resume."),
        ];

        let help_widget = Paragraph::new(help_text)
            .block(help_block)
            .style(theme.normal_text)
            .alignment(Alignment::Left);

        frame.render_widget(help_widget, popup_area);
    }

    /// Helper function to create a centered rect using percentages
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_width = r.width * percent_x / 100;
        let popup_height = r.height * percent_y / 100;

        let popup_x = (r.width - popup_width) / 2;
        let popup_y = (r.height - popup_height) / 2;

        Rect {
            x: r.x + popup_x,
            y: r.y + popup_y,
            width: popup_width,
            height: popup_height,
        }
    }
}
