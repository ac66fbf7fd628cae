//! Ordered card sequence for the marquee strip.
//!
//! The track never creates or destroys cards while running. Recycling only
//! relocates the tail card to the head, so it is stored as a ring of card
//! identifiers and rotated in place.

use std::collections::VecDeque;

/// Index of a card in the seeded card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

/// Ordered sequence of cards, head first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    order: VecDeque<CardId>,
}

impl Track {
    /// Create a track holding cards `0..len` in order.
    pub fn sequential(len: usize) -> Self {
        Self {
            order: (0..len).map(CardId).collect(),
        }
    }

    /// Number of cards on the track.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the track has no cards.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The card at the recycling boundary.
    pub fn last(&self) -> Option<CardId> {
        self.order.back().copied()
    }

    /// Move the tail card to the head, keeping every other card in order.
    ///
    /// Returns the relocated card, or `None` on an empty track.
    pub fn recycle_last(&mut self) -> Option<CardId> {
        let card = self.order.pop_back()?;
        self.order.push_front(card);
        Some(card)
    }

    /// Iterate cards head to tail.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }
}
