//! # pkiosk-tui - Terminal UI for Print Kiosk Go
//!
//! This crate provides the ratatui-based kiosk interface: terminal
//! lifecycle, crossterm event polling, the main event loop, and one screen
//! widget per wizard step.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
