//! Stats marquee library
//!
//! A seamless, hover-pausable marquee of stat cards for the terminal.

pub mod app;
pub mod config;
pub mod event;
pub mod marquee;
pub mod state;
pub mod ui;
