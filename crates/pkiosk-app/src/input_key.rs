//! Terminal-agnostic key representation
//!
//! The TUI crate translates crossterm key events into this enum so the
//! handlers (and their tests) never touch a terminal backend.

/// A single key press, already normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    /// A character pressed together with Ctrl
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}
