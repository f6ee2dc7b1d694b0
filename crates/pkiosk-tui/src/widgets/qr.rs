//! Fake QR block
//!
//! A fixed bitmap standing in for a real QR code, like the hard-coded
//! graphic on the kiosk's screens. Scanning it goes nowhere.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::palette;

/// 17×17 module pattern: finder squares in three corners, timing row and
/// column, fixed noise elsewhere. `#` is a dark module.
const QR_PATTERN: [&str; 17] = [
    "#######.#.#######",
    "#.....#...#.....#",
    "#.###.#.#.#.###.#",
    "#.###.#...#.###.#",
    "#.###.#.#.#.###.#",
    "#.....#...#.....#",
    "#######.#.#######",
    "........#........",
    "#.#.#.###.#.#.#.#",
    ".#..#...#...#..#.",
    "#######.#..##.#.#",
    "#.....#..#...##..",
    "#.###.#.#.##..#.#",
    "#.###.#..#..##...",
    "#.###.#.##.#..##.",
    "#.....#..#.##..#.",
    "#######.#..#.###.",
];

/// Render the pattern as terminal lines, two columns per module so the
/// blocks come out roughly square.
pub fn qr_lines() -> Vec<Line<'static>> {
    QR_PATTERN
        .iter()
        .map(|row| {
            let rendered: String = row
                .chars()
                .map(|c| if c == '#' { "██" } else { "  " })
                .collect();
            Line::from(Span::styled(
                rendered,
                Style::default().fg(palette::TEXT_BRIGHT),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_square() {
        assert!(QR_PATTERN.iter().all(|row| row.len() == QR_PATTERN.len()));
    }

    #[test]
    fn test_lines_double_module_width() {
        let lines = qr_lines();
        assert_eq!(lines.len(), QR_PATTERN.len());
        assert_eq!(lines[0].width(), QR_PATTERN.len() * 2);
    }
}
