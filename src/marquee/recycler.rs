//! Recycler.
//!
//! Once the offset has moved past zero, the tail card is moved to the head
//! and the offset is pulled back by exactly that card's span. Every other card
//! keeps its on-screen position, so the strip never visibly jumps.

use super::track::{CardId, Track};

/// Upper bound on recycles within a single frame.
pub const MAX_RECYCLES_PER_FRAME: usize = 100;

/// What one recycling pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecycleReport {
    /// Offset after the pass.
    pub offset: f64,
    /// Number of cards moved from tail to head.
    pub recycled: usize,
    /// The pass stopped on the per-frame bound rather than on the offset.
    pub hit_bound: bool,
}

/// Recycle tail cards until the offset is no longer positive.
///
/// `width_of` is called on the tail card before it is moved. The loop stops
/// after `max_recycles` moves even if the offset is still positive; the next
/// frame picks up where this one left off.
pub fn recycle<F>(
    track: &mut Track,
    mut offset: f64,
    gap: f64,
    max_recycles: usize,
    mut width_of: F,
) -> RecycleReport
where
    F: FnMut(CardId) -> f64,
{
    let mut recycled = 0;

    while offset > 0.0 && recycled < max_recycles {
        let Some(last) = track.last() else {
            break;
        };

        let shift = width_of(last) + gap;
        track.recycle_last();
        offset -= shift;
        recycled += 1;

        tracing::trace!(card = last.0, shift, offset, "recycled card to head");
    }

    RecycleReport {
        offset,
        recycled,
        hit_bound: offset > 0.0 && recycled == max_recycles && !track.is_empty(),
    }
}
