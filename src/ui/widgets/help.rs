//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;
use crate::ui::Colors;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings, colors: &Colors) {
        let popup_area = centered_rect(70, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let key_style = Style::default().fg(colors.accent);
        let entry = |key: String, description: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<8}", key), key_style),
                Span::raw(description),
            ])
        };
        let heading = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(colors.foreground)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let help_text = vec![
            heading("Matches"),
            Line::from(""),
            entry(format!("{}/←", keys.previous), "Previous match"),
            entry(format!("{}/→", keys.next), "Next match"),
            entry(keys.refresh.clone(), "Refresh now"),
            Line::from(""),
            heading("Window"),
            Line::from(""),
            entry(keys.theme.clone(), "Toggle theme"),
            entry("Esc".to_string(), "Collapse to ticker"),
            entry(keys.help.clone(), "Toggle help"),
            entry(keys.quit.clone(), "Quit"),
        ];

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.accent)),
            )
            .style(colors.base());

        frame.render_widget(help, popup_area);
    }
}
