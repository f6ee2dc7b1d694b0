//! Screen layout helpers

use ratatui::layout::{Constraint, Layout, Rect};

/// Split the terminal into header, body, and status bar.
pub fn screen_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// A rect of at most `width` × `height`, centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_chunks_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, status) = screen_chunks(area);
        assert_eq!(header.height, 3);
        assert_eq!(status.height, 1);
        assert_eq!(header.height + body.height + status.height, area.height);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered(area, 100, 100);
        assert_eq!(rect, area);

        let rect = centered(area, 20, 4);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
