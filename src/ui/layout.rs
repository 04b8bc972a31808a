//! Common layout helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split area into header, content, status and footer
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Content
            Constraint::Length(1), // Status
            Constraint::Length(2), // Footer
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Split content area into ring (left) and controls (right)
pub fn content_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Ring
            Constraint::Percentage(40), // Controls
        ])
        .split(area);
    (chunks[0], chunks[1])
}
