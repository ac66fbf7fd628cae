//! Stat card descriptors.
//!
//! Cards only carry presentational payload; the marquee engine never looks
//! inside them except through the host's width measurement.

use serde::{Deserialize, Serialize};

/// Badge shown in the corner of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Reservations,
    GuestNights,
    Calendar,
    Reviews,
    Portfolio,
    Location,
}

impl Icon {
    /// Single-column glyph for the badge.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Reservations => "✔",
            Icon::GuestNights => "✦",
            Icon::Calendar => "▦",
            Icon::Reviews => "★",
            Icon::Portfolio => "$",
            Icon::Location => "⌖",
        }
    }
}

/// One stat tile on the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Caption, e.g. "Guest Nights".
    pub label: String,
    /// Headline metric, e.g. "+67K".
    pub value: String,
    pub icon: Icon,
    /// Second copy seeded for the loop; not counted as a distinct stat.
    #[serde(skip)]
    pub duplicate: bool,
}

impl Card {
    pub fn new(label: impl Into<String>, value: impl Into<String>, icon: Icon) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon,
            duplicate: false,
        }
    }
}

/// The company's journey in numbers, in display order.
pub fn default_cards() -> Vec<Card> {
    vec![
        Card::new("Total Reservations", "+14K", Icon::Reservations),
        Card::new("Guest Nights", "+67K", Icon::GuestNights),
        Card::new("Guest Nights Into Years", "173", Icon::Calendar),
        Card::new("5 Star Reviews", "+10K", Icon::Reviews),
        Card::new("Portfolio Worth", "+100M", Icon::Portfolio),
        Card::new("States We Manage", "14", Icon::Location),
    ]
}

/// Two consecutive copies of `base`, the second marked as a duplicate.
pub fn seed_track(base: &[Card]) -> Vec<Card> {
    let copies = base.iter().cloned().chain(base.iter().cloned().map(|mut card| {
        card.duplicate = true;
        card
    }));
    copies.collect()
}
