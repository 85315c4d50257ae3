//! Match card widget.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{Match, OddsCell, OddsState};
use crate::ui::Colors;

/// The card for the selected match.
pub struct MatchCard;

impl MatchCard {
    /// Render the card.
    pub fn render(frame: &mut Frame, area: Rect, m: &Match, odds: &OddsState, colors: &Colors) {
        let border = if m.is_live() { colors.live } else { colors.border };

        let mut header = vec![Span::styled(
            m.map_label(),
            Style::default()
                .fg(colors.foreground)
                .add_modifier(Modifier::BOLD),
        )];
        if m.is_live() {
            header.push(Span::raw("  "));
            header.push(Span::styled(
                "● LIVE",
                Style::default()
                    .fg(colors.live)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if !m.time_until_match.is_empty() {
            header.push(Span::styled(format!("  {}", m.time_until_match), colors.muted()));
        }

        let mut lines = vec![
            Line::from(header),
            Line::from(Span::styled(m.series_label().to_string(), colors.muted())),
            Line::from(""),
            Line::from(vec![
                Span::styled(m.team1.clone(), team_style(m.score1, m.score2, colors)),
                Span::raw("   "),
                Span::styled(
                    m.score_line(),
                    Style::default()
                        .fg(colors.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(m.team2.clone(), team_style(m.score2, m.score1, colors)),
            ]),
        ];

        if m.has_round_data() {
            lines.push(Line::from(Span::styled(
                format!("rounds {} - {}", m.rounds1(), m.rounds2()),
                colors.muted(),
            )));
        }

        if let Some((left, right)) = odds.cells() {
            lines.push(Line::from(vec![
                odds_span(&left, colors),
                Span::styled("   odds   ", colors.muted()),
                odds_span(&right, colors),
            ]));
        }

        if let Some(url) = odds.market_url() {
            lines.push(Line::from(Span::styled(
                url.to_string(),
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }

        if let Some(event) = m.event_label() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(event.to_string(), colors.muted())));
        }

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .style(colors.base());

        frame.render_widget(card, area);
    }
}

fn team_style(own: u32, other: u32, colors: &Colors) -> Style {
    let style = Style::default().fg(colors.foreground);
    if own > other {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn odds_span(cell: &OddsCell, colors: &Colors) -> Span<'static> {
    let style = match cell {
        OddsCell::Price(price) if price.starts_with('-') => Style::default().fg(colors.favourite),
        OddsCell::Price(_) => Style::default().fg(colors.underdog),
        OddsCell::Pending | OddsCell::NotAvailable => colors.muted(),
    };
    Span::styled(cell.text().to_string(), style)
}
