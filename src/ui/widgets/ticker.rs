//! Collapsed one-line ticker.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::ui::Colors;

pub struct Ticker;

impl Ticker {
    /// Render `text` on the first row of `area` and blank the rest.
    pub fn render(frame: &mut Frame, area: Rect, text: &str, colors: &Colors) {
        frame.render_widget(
            Paragraph::new(Line::from(text.to_string())).style(colors.base()),
            area,
        );
    }
}
