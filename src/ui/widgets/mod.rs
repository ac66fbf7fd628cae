//! Custom widgets for the stats marquee.
//!
//! - [`StatCard`] draws a single stat tile
//! - [`MarqueeStrip`] draws the scrolling track of tiles, clipped to its area

pub mod marquee;
pub mod stat_card;

pub use marquee::MarqueeStrip;
pub use stat_card::StatCard;
