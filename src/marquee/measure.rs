//! Item measurement.
//!
//! The engine never renders anything itself; it asks the host for the live
//! layout through [`Measure`]. The gap is read once and cached until the
//! viewport changes, card widths are read fresh at every recycle.

use crate::state::Card;

/// Read-only view of the host's live layout.
#[cfg_attr(test, mockall::automock)]
pub trait Measure {
    /// Raw computed gap style of the track container, if any.
    fn computed_gap(&self) -> Option<String>;

    /// Rendered width of a card, if it can be measured.
    fn width_of(&self, card: &Card) -> Option<f64>;
}

/// Parse a gap style value the way a browser's `parseFloat` does.
///
/// The longest numeric prefix wins (`"24px"` is `24`). Anything that does not
/// start with a number, and any negative or non-finite result, yields `0`.
pub fn parse_gap(raw: &str) -> f64 {
    let raw = raw.trim_start();
    let prefix_len = numeric_prefix_len(raw);

    let value = raw[..prefix_len].parse::<f64>().unwrap_or(0.0);
    sanitize(value)
}

/// Clamp a measured length to a non-negative finite number.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut best = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
                best = end;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            b'e' | b'E' if seen_digit => {
                // Exponent only counts when digits follow it
                let mut exp_end = end + 1;
                if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                    exp_end += 1;
                }
                let digits = bytes[exp_end..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if digits > 0 {
                    best = exp_end + digits;
                }
                break;
            }
            _ => break,
        }
    }

    best
}

/// Cached gap between adjacent cards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gap(f64);

impl Gap {
    /// Gap with an explicit value, sanitized.
    pub fn new(value: f64) -> Self {
        Self(sanitize(value))
    }

    /// Read the container's computed gap, defaulting to `0`.
    pub fn measure<M: Measure + ?Sized>(measure: &M) -> Self {
        let gap = measure
            .computed_gap()
            .map(|raw| parse_gap(&raw))
            .unwrap_or(0.0);
        Self(gap)
    }

    /// Gap in columns.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Width of a card as seen by the recycler, degraded to `0` when unmeasurable.
pub fn width_of<M: Measure + ?Sized>(measure: &M, card: &Card) -> f64 {
    match measure.width_of(card) {
        Some(width) if width.is_finite() && width >= 0.0 => width,
        other => {
            tracing::warn!(label = %card.label, width = ?other, "unmeasurable card width, using 0");
            0.0
        }
    }
}
