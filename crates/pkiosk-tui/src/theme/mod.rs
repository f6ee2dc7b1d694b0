//! Theme: palette constants and shared styles

pub mod palette;

use ratatui::style::{Modifier, Style};

/// Style for the focused/selected row of a list or form.
pub fn selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Style for screen titles.
pub fn title() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Style for secondary/explanatory text.
pub fn muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Style for emphasized values (totals, file names).
pub fn value() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}
