//! State management for valbar.
//!
//! All state lives in a single [`Store`] changed only by reducing
//! [`Action`]s. Async work never touches the store directly; it reports back
//! by dispatching an action that the event loop reduces.

mod app_state;
mod carousel;
mod match_state;
mod odds_state;
mod theme;

pub use app_state::AppState;
pub use carousel::CarouselState;
pub use match_state::{
    FEED_ERROR_FALLBACK, LIVE_SENTINEL, Match, MatchFeedState, RefreshToken, UNKNOWN_MAP,
};
pub use odds_state::{
    AmericanOdds, NOT_AVAILABLE, Odds, OddsCell, OddsState, OddsTicket, PENDING, TeamPair,
    format_american,
};
pub use theme::{THEME_KEY, ThemePreference};

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Match feed
    RefreshMatches,
    MatchesLoaded {
        token: RefreshToken,
        result: std::result::Result<Vec<Match>, String>,
    },

    // Carousel
    NextMatch,
    PreviousMatch,

    // Odds
    OddsResolved {
        ticket: OddsTicket,
        result: std::result::Result<Odds, String>,
    },

    // Surface
    FocusLost,
    FocusGained,
    Hide,
    Show,

    // UI
    ToggleTheme,
    ToggleHelp,

    // Quit
    Quit,
}

/// What the main area should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedView<'a> {
    /// First load still in flight.
    Loading,
    /// Nothing to show and the last refresh failed.
    Error(&'a str),
    /// Refresh succeeded with no live matches.
    Empty,
    /// The selected match.
    Match(&'a Match),
}

/// The global state store.
#[derive(Debug, Default)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Live match feed.
    pub feed: MatchFeedState,
    /// Selected match.
    pub carousel: CarouselState,
    /// Odds for the selected match.
    pub odds: OddsState,
}

impl Store {
    /// Create a new store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store starting with the given theme.
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self {
            app: AppState::with_theme(theme),
            ..Default::default()
        }
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Issuing a refresh needs the feed controller, see `Session`.
            Action::RefreshMatches => {}
            Action::MatchesLoaded { token, result } => {
                self.feed.complete_refresh(token, result);
                self.carousel.clamp(self.feed.matches.len());
            }

            Action::NextMatch => self.carousel.next(self.feed.matches.len()),
            Action::PreviousMatch => self.carousel.previous(),

            Action::OddsResolved { ticket, result } => {
                self.odds.resolve(&ticket, result);
            }

            Action::FocusLost => self.app.focused = false,
            Action::FocusGained => {
                self.app.focused = true;
                self.app.hidden = false;
            }
            Action::Hide => self.app.hidden = true,
            Action::Show => self.app.hidden = false,

            Action::ToggleTheme => self.app.theme = self.app.theme.toggled(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,

            Action::Quit => self.app.should_quit = true,
        }
    }

    /// The match under the carousel, if any.
    pub fn selected_match(&self) -> Option<&Match> {
        self.carousel.current(&self.feed.matches)
    }

    /// Re-key odds on the selected pair; a ticket means a fetch is due.
    pub fn track_selected_pair(&mut self) -> Option<OddsTicket> {
        let pair = self.selected_match().map(Match::team_pair);
        self.odds.track(pair)
    }

    pub fn can_go_previous(&self) -> bool {
        self.carousel.can_go_previous(self.feed.matches.len())
    }

    pub fn can_go_next(&self) -> bool {
        self.carousel.can_go_next(self.feed.matches.len())
    }

    /// Decide what the main area shows.
    pub fn view(&self) -> FeedView<'_> {
        match self.selected_match() {
            Some(m) => FeedView::Match(m),
            None if self.feed.loading => FeedView::Loading,
            None => match &self.feed.error {
                Some(error) => FeedView::Error(error),
                None => FeedView::Empty,
            },
        }
    }

    /// Compact one-line summary shown while the widget is hidden.
    pub fn ticker_line(&self, label: &str) -> String {
        let body = match self.feed.matches.first() {
            Some(m) => m.ticker_text(),
            None if !self.feed.has_loaded() => "Loading...".to_string(),
            None => "No matches".to_string(),
        };
        format!("{}: {}", label, body)
    }
}
