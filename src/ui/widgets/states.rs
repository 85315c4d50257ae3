//! Placeholder panels for when there is no match to show.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::FeedView;
use crate::ui::Colors;

/// Loading, error, and empty states of the feed.
pub struct StatePanel;

impl StatePanel {
    /// Render the panel. A [`FeedView::Match`] renders nothing here.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        view: &FeedView<'_>,
        refresh_key: &str,
        colors: &Colors,
    ) {
        let lines = match view {
            FeedView::Loading => vec![Line::from(Span::styled(
                "Loading live matches...",
                colors.muted().add_modifier(Modifier::ITALIC),
            ))],
            FeedView::Error(message) => vec![
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(colors.accent),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Press {} to retry", refresh_key),
                    colors.muted(),
                )),
            ],
            FeedView::Empty => vec![Line::from(Span::styled(
                "No live matches at the moment",
                colors.muted(),
            ))],
            FeedView::Match(_) => return,
        };

        // Push the message towards the middle of the card
        let inner_height = area.height.saturating_sub(2) as usize;
        let top = inner_height.saturating_sub(lines.len()) / 2;
        let mut padded = vec![Line::from(""); top];
        padded.extend(lines);

        let panel = Paragraph::new(padded)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border)),
            )
            .style(colors.base());

        frame.render_widget(panel, area);
    }
}
