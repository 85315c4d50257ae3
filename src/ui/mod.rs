//! UI rendering using ratatui.
//!
//! Everything here is a pure function of the [`Store`] and the [`Config`];
//! nothing in this module mutates state.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{Footer, Header, HelpPanel, MatchCard, NavBar, StatePanel, Ticker};

use crate::config::{Config, Palette};
use crate::state::{FeedView, Store};
use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::Block,
};
use std::str::FromStr;

/// A [`Palette`] resolved to terminal colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub live: Color,
    pub favourite: Color,
    pub underdog: Color,
    pub border: Color,
}

impl Colors {
    /// Resolve a palette. Unparseable entries fall back to the terminal default.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: parse_color(&palette.background),
            foreground: parse_color(&palette.foreground),
            muted: parse_color(&palette.muted),
            accent: parse_color(&palette.accent),
            live: parse_color(&palette.live),
            favourite: parse_color(&palette.favourite),
            underdog: parse_color(&palette.underdog),
            border: parse_color(&palette.border),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

fn parse_color(value: &str) -> Color {
    Color::from_str(value.trim()).unwrap_or(Color::Reset)
}

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, config: &Config) {
        let colors = Colors::from_palette(config.theme.palette(store.app.theme));

        if store.app.hidden {
            Ticker::render(
                frame,
                frame.area(),
                &store.ticker_line(&config.ui.game_label),
                &colors,
            );
            return;
        }

        frame.render_widget(Block::default().style(colors.base()), frame.area());
        let layout = Layout::new(frame.area());

        Header::render(frame, layout.header_area, store, &config.ui.game_label, &colors);

        match store.view() {
            FeedView::Match(m) => MatchCard::render(frame, layout.body_area, m, &store.odds, &colors),
            view => StatePanel::render(
                frame,
                layout.body_area,
                &view,
                &config.keybindings.refresh,
                &colors,
            ),
        }

        NavBar::render(frame, layout.nav_area, store, &colors);
        Footer::render(frame, layout.footer_area, store, &colors);

        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &config.keybindings, &colors);
        }
    }
}
