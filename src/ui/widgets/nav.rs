//! Carousel navigation widget.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Store;
use crate::ui::Colors;

/// Previous/next arrows around the position label.
pub struct NavBar;

impl NavBar {
    /// Render the navigation line. Nothing is drawn for fewer than two matches.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, colors: &Colors) {
        let Some(position) = store.carousel.position_label(store.feed.matches.len()) else {
            return;
        };

        let arrow = |symbol: &'static str, enabled: bool| {
            if enabled {
                Span::styled(
                    symbol,
                    Style::default()
                        .fg(colors.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(symbol, colors.muted().add_modifier(Modifier::DIM))
            }
        };

        let line = Line::from(vec![
            arrow("◀", store.can_go_previous()),
            Span::styled(format!("  {}  ", position), Style::default().fg(colors.foreground)),
            arrow("▶", store.can_go_next()),
        ]);

        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .style(colors.base()),
            area,
        );
    }
}
