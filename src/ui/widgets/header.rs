//! Header line widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Store, ThemePreference};
use crate::ui::Colors;

/// Header line: game pill, title, and status icons.
pub struct Header;

impl Header {
    /// Render the header.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, game_label: &str, colors: &Colors) {
        let pill = Span::styled(
            format!(" {} ", game_label),
            Style::default()
                .fg(colors.background)
                .bg(colors.accent)
                .add_modifier(Modifier::BOLD),
        );

        let loading = if store.feed.loading {
            Span::styled(
                " ↻",
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let left = vec![
            pill,
            Span::styled(
                " Live Match",
                Style::default()
                    .fg(colors.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            loading,
        ];

        let theme_icon = match store.app.theme {
            ThemePreference::Dark => "☾",
            ThemePreference::Light => "☀",
        };
        let right = vec![
            Span::styled(theme_icon, Style::default().fg(colors.foreground)),
            Span::styled("  ? ", colors.muted()),
        ];

        // Right-align the icons
        let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
        let right_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
        let padding = usize::from(area.width).saturating_sub(left_len + right_len);

        let mut line = left;
        line.push(Span::raw(" ".repeat(padding)));
        line.extend(right);

        frame.render_widget(Paragraph::new(Line::from(line)).style(colors.base()), area);
    }
}
