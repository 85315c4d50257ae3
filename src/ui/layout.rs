//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Header line with the game label and status icons.
    pub header_area: Rect,
    /// Match card or feed state panel.
    pub body_area: Rect,
    /// Carousel navigation.
    pub nav_area: Rect,
    /// Match count and last update.
    pub footer_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Card
                Constraint::Length(1), // Navigation
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            body_area: chunks[1],
            nav_area: chunks[2],
            footer_area: chunks[3],
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
