//! Application state and logic.
//!
//! This module wires the marquee engine, the UI and the event stream
//! together. The marquee is mounted when the loop starts and unmounted on
//! every way out of it.

use color_eyre::Result;
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::state::AppState;
use crate::ui::{Ui, UpdateKind};

/// Main application.
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
    /// Application configuration
    config: AppConfig,
    /// UI controller
    ui: Ui,
    /// Should the application exit?
    should_quit: bool,
}

impl App {
    /// Creates a new application instance for a viewport `viewport_width`
    /// columns wide.
    pub fn new(config: AppConfig, viewport_width: u16) -> Self {
        let state = AppState::new(
            config.marquee(),
            config.cards.clone(),
            config.gap_style(),
            viewport_width,
        );
        let ui = Ui::new(config.edge_fade);

        Self {
            state,
            config,
            ui,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    /// Runs the application main loop until quit or the event stream ends.
    pub async fn run<B, S>(&mut self, terminal: &mut Terminal<B>, events: &mut S) -> Result<()>
    where
        B: Backend,
        S: Stream<Item = Event> + Unpin,
    {
        self.state.mount();
        let result = self.event_loop(terminal, events).await;
        self.state.unmount();
        result
    }

    /// Runs the application main loop with Crossterm backend.
    pub async fn run_with_crossterm(&mut self) -> Result<()> {
        use ratatui::backend::CrosstermBackend;

        let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
        let size = terminal.size()?;
        self.state.layout.set_viewport_width(size.width);

        let mut events = EventHandler::new(self.config.frame_rate_hz);
        self.run(&mut terminal, &mut events).await
    }

    async fn event_loop<B, S>(&mut self, terminal: &mut Terminal<B>, events: &mut S) -> Result<()>
    where
        B: Backend,
        S: Stream<Item = Event> + Unpin,
    {
        terminal.draw(|frame| self.ui.render(frame, &self.state))?;

        while !self.should_quit {
            let Some(event) = events.next().await else {
                tracing::debug!("event stream closed");
                break;
            };

            if self.handle_event(event) {
                terminal.draw(|frame| self.ui.render(frame, &self.state))?;
            }
        }

        Ok(())
    }

    /// Handles one event; returns whether the screen needs redrawing.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Frame(timestamp_ms) => {
                self.state.frame(timestamp_ms);
                true
            }
            Event::Key(key) => {
                match self.ui.handle_key_event(key) {
                    UpdateKind::Quit => self.should_quit = true,
                    UpdateKind::ToggleHelp => self.ui.toggle_help(),
                    UpdateKind::Other => return false,
                }
                true
            }
            Event::Mouse(mouse) => {
                let strip = self.ui.strip_area();
                if let Some(transition) = self.state.pointer.update(mouse.column, mouse.row, strip) {
                    tracing::debug!(?transition, "pointer crossed marquee");
                    self.state.apply_pointer(transition);
                }
                false
            }
            Event::FocusLost => {
                if let Some(transition) = self.state.pointer.exit() {
                    self.state.apply_pointer(transition);
                }
                false
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                self.state.resize(width);
                true
            }
        }
    }
}
