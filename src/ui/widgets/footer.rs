//! Footer widget.

use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Store;
use crate::ui::Colors;

/// Match count, last update time, and a marker for a failed background refresh.
pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, colors: &Colors) {
        let mut spans = vec![Span::styled(
            format!(" {}", store.feed.count_label()),
            colors.muted(),
        )];

        if let Some(updated) = store.feed.last_updated {
            spans.push(Span::styled(
                format!(" · updated {}", updated.with_timezone(&Local).format("%H:%M:%S")),
                colors.muted(),
            ));
        }

        // The last refresh failed but an older list is still on screen.
        if store.feed.error.is_some() && !store.feed.matches.is_empty() {
            spans.push(Span::styled(" · stale", Style::default().fg(colors.accent)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(colors.base()), area);
    }
}
