//! UI components for the stats marquee.
//!
//! A single screen: a header, the scrolling strip of stat cards and a status
//! line, with an optional help overlay on top.

pub mod help;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use help::HelpView;
pub use theme::Theme;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::marquee::Playback;
use crate::state::AppState;
use widgets::stat_card::CARD_HEIGHT;
use widgets::MarqueeStrip;

const TITLE: &str = "Our Journey In Numbers";
const SUBTITLE: &str =
    "Years of dedication, thousands of happy guests, and millions in managed portfolio value";

/// The result of updating the UI in response to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Other update (no action needed)
    Other,
}

/// Main UI controller.
#[derive(Debug)]
pub struct Ui {
    /// Whether to show help overlay
    show_help: bool,
    /// UI theme
    theme: Theme,
    /// Share of the strip dimmed on each edge
    edge_fade: f64,
    /// Where the strip was last drawn, for pointer hit-testing
    strip_area: Rect,
}

impl Ui {
    /// Create a new UI controller.
    pub fn new(edge_fade: f64) -> Self {
        Self {
            show_help: false,
            theme: Theme::default(),
            edge_fade,
            strip_area: Rect::default(),
        }
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Area of the marquee strip as of the last render.
    pub fn strip_area(&self) -> Rect {
        self.strip_area
    }

    /// Handle keyboard input.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> UpdateKind {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => UpdateKind::Quit,
            KeyCode::Char('q') | KeyCode::Esc => UpdateKind::Quit,
            KeyCode::F(1) | KeyCode::Char('?') => UpdateKind::ToggleHelp,
            _ => UpdateKind::Other,
        }
    }

    /// Render the UI.
    pub fn render(&mut self, frame: &mut Frame, app_state: &AppState) {
        let area = frame.size();
        let [header, strip, status] = Self::split(area);
        self.strip_area = strip;

        self.render_header(frame, header);
        frame.render_widget(
            MarqueeStrip::new(&app_state.marquee, &app_state.layout)
                .theme(&self.theme)
                .edge_fade(self.edge_fade),
            strip,
        );
        self.render_status_line(frame, status, app_state);

        // Render help overlay if active (always on top)
        if self.show_help {
            HelpView::render(frame, area, &self.theme);
        }
    }

    /// Header, strip and status line areas.
    fn split(area: Rect) -> [Rect; 3] {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        [rows[1], rows[2], rows[4]]
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(TITLE, self.theme.header_style)),
            Line::from(Span::styled(SUBTITLE, self.theme.subtitle_style)),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, app_state: &AppState) {
        let marquee = &app_state.marquee;
        let playback = marquee.playback();

        let status_style = match playback {
            Playback::Running => self.theme.status_live,
            Playback::Paused => self.theme.status_paused,
        };

        let details = match marquee.state() {
            Some(state) => format!(
                " | Offset: {:.1} | Gap: {} | Stats: {} | Recycled: {} | Press ? for help",
                state.offset,
                state.gap.get(),
                marquee.stat_count(),
                marquee.total_recycled()
            ),
            None => " | Not mounted".to_string(),
        };

        let line = Line::from(vec![
            Span::styled(playback.label(), status_style),
            Span::styled(details, self.theme.help_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
