//! Application configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. Files are JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::event::DEFAULT_FRAME_RATE_HZ;
use crate::marquee::{MarqueeConfig, DEFAULT_SPEED, MAX_RECYCLES_PER_FRAME};
use crate::state::{default_cards, Card};
use crate::ui::layout::GapStyle;
use crate::ui::widgets::marquee::DEFAULT_EDGE_FADE;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Animation frames per second.
    pub frame_rate_hz: u32,
    /// Scroll speed in columns per second.
    pub speed: f64,
    /// Gap between cards, as a style string.
    pub gap: String,
    /// Gap used at or above `wide_breakpoint` columns.
    pub wide_gap: Option<String>,
    pub wide_breakpoint: u16,
    /// Safety bound on recycles per frame.
    pub max_recycles_per_frame: usize,
    /// Share of the strip dimmed on each edge.
    pub edge_fade: f64,
    /// Base card sequence.
    pub cards: Vec<Card>,
    /// Where log output goes; `None` disables logging.
    pub log_file: Option<PathBuf>,
    pub debug_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gap_style = GapStyle::default();
        Self {
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            speed: DEFAULT_SPEED,
            gap: gap_style.gap,
            wide_gap: gap_style.wide_gap,
            wide_breakpoint: gap_style.wide_breakpoint,
            max_recycles_per_frame: MAX_RECYCLES_PER_FRAME,
            edge_fade: DEFAULT_EDGE_FADE,
            cards: default_cards(),
            log_file: Some(PathBuf::from("stats-marquee.log")),
            debug_mode: false,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the marquee cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate_hz == 0 {
            return Err(ConfigError::Invalid("frame_rate_hz must be positive".into()));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "speed must be a non-negative number, got {}",
                self.speed
            )));
        }
        if self.cards.is_empty() {
            return Err(ConfigError::Invalid("at least one card is required".into()));
        }
        if !(0.0..=0.5).contains(&self.edge_fade) {
            return Err(ConfigError::Invalid(format!(
                "edge_fade must be within [0, 0.5], got {}",
                self.edge_fade
            )));
        }
        Ok(())
    }

    pub fn marquee(&self) -> MarqueeConfig {
        MarqueeConfig {
            speed: self.speed,
            max_recycles_per_frame: self.max_recycles_per_frame,
        }
    }

    pub fn gap_style(&self) -> GapStyle {
        GapStyle {
            gap: self.gap.clone(),
            wide_gap: self.wide_gap.clone(),
            wide_breakpoint: self.wide_breakpoint,
        }
    }
}
