//! Per-match betting odds and the American moneyline conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Rendered in place of a price that cannot be formatted.
pub const NOT_AVAILABLE: &str = "—";

/// Rendered while a lookup for the current pair is in flight.
pub const PENDING: &str = "...";

/// The `(team1, team2)` identity an odds lookup is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPair {
    pub team1: String,
    pub team2: String,
}

impl TeamPair {
    pub fn new(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
        }
    }
}

impl fmt::Display for TeamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.team1, self.team2)
    }
}

/// Prediction-market odds for one pairing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    /// Win probability for team 1, in `[0, 1]`.
    pub team1_odds: Option<f64>,
    /// Win probability for team 2, in `[0, 1]`.
    pub team2_odds: Option<f64>,
    /// Link to the market page.
    pub market_url: Option<String>,
}

impl Odds {
    /// Odds with no prices, only a market link.
    pub fn unpriced(market_url: impl Into<String>) -> Self {
        Self {
            team1_odds: None,
            team2_odds: None,
            market_url: Some(market_url.into()),
        }
    }
}

/// An American moneyline price.
///
/// Favourites are negative (stake needed to win 100), underdogs positive
/// (winnings per 100 staked).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmericanOdds(i64);

impl AmericanOdds {
    /// Convert a win probability.
    ///
    /// Returns `None` for absent, zero, or otherwise unpriceable values
    /// (anything outside the open interval `(0, 1)`).
    pub fn from_probability(p: f64) -> Option<Self> {
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return None;
        }

        let american = if p >= 0.5 {
            p / (1.0 - p) * -100.0
        } else {
            (1.0 - p) / p * 100.0
        };
        Some(Self(round_half_up(american)))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Format an optional probability, `None` meaning "not available".
pub fn format_american(probability: Option<f64>) -> Option<String> {
    probability
        .and_then(AmericanOdds::from_probability)
        .map(|odds| odds.to_string())
}

/// Rounds halves towards positive infinity, so `-150.5` becomes `-150`.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// What one side's odds cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OddsCell {
    Pending,
    Price(String),
    NotAvailable,
}

impl OddsCell {
    fn from_probability(probability: Option<f64>) -> Self {
        match format_american(probability) {
            Some(price) => Self::Price(price),
            None => Self::NotAvailable,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Pending => PENDING,
            Self::Price(price) => price,
            Self::NotAvailable => NOT_AVAILABLE,
        }
    }
}

/// A lookup issued for a specific pair.
///
/// Only the ticket issued most recently may commit its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddsTicket {
    pub id: u64,
    pub pair: TeamPair,
}

/// Odds for the match currently on screen.
#[derive(Debug, Default)]
pub struct OddsState {
    pair: Option<TeamPair>,
    odds: Option<Odds>,
    loading: bool,
    issued: u64,
}

impl OddsState {
    /// Follow the pair currently on screen.
    ///
    /// Returns a ticket to fetch when the pair differs from the tracked one;
    /// returns `None` when nothing changed or nothing is selected. A change
    /// always drops the previous pair's odds.
    pub fn track(&mut self, pair: Option<TeamPair>) -> Option<OddsTicket> {
        if self.pair == pair {
            return None;
        }

        self.pair = pair.clone();
        self.odds = None;
        self.loading = false;

        let pair = pair?;
        self.issued += 1;
        self.loading = true;
        Some(OddsTicket {
            id: self.issued,
            pair,
        })
    }

    /// Commit a finished lookup. Returns `false` if the ticket was stale.
    pub fn resolve(
        &mut self,
        ticket: &OddsTicket,
        result: std::result::Result<Odds, String>,
    ) -> bool {
        if ticket.id != self.issued || self.pair.as_ref() != Some(&ticket.pair) {
            debug!(ticket = ticket.id, pair = %ticket.pair, "discarding stale odds");
            return false;
        }

        self.loading = false;
        match result {
            Ok(odds) => self.odds = Some(odds),
            Err(e) => warn!(pair = %ticket.pair, error = %e, "odds lookup failed"),
        }
        true
    }

    pub fn pair(&self) -> Option<&TeamPair> {
        self.pair.as_ref()
    }

    pub fn odds(&self) -> Option<&Odds> {
        self.odds.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cells for both teams, or `None` when there is no odds row to draw.
    pub fn cells(&self) -> Option<(OddsCell, OddsCell)> {
        if self.loading {
            return Some((OddsCell::Pending, OddsCell::Pending));
        }
        self.odds.as_ref().map(|odds| {
            (
                OddsCell::from_probability(odds.team1_odds),
                OddsCell::from_probability(odds.team2_odds),
            )
        })
    }

    pub fn market_url(&self) -> Option<&str> {
        self.odds.as_ref()?.market_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn priced(team1: f64, team2: f64) -> Odds {
        Odds {
            team1_odds: Some(team1),
            team2_odds: Some(team2),
            market_url: None,
        }
    }

    #[test]
    fn test_american_favourite() {
        assert_eq!(format_american(Some(0.6)).as_deref(), Some("-150"));
        assert_eq!(format_american(Some(0.5)).as_deref(), Some("-100"));
        assert_eq!(format_american(Some(0.96)).as_deref(), Some("-2400"));
    }

    #[test]
    fn test_american_underdog() {
        assert_eq!(format_american(Some(0.4)).as_deref(), Some("+150"));
        assert_eq!(format_american(Some(0.04)).as_deref(), Some("+2400"));
        assert_eq!(format_american(Some(0.45)).as_deref(), Some("+122"));
    }

    #[test]
    fn test_american_unformattable() {
        assert_eq!(format_american(None), None);
        assert_eq!(format_american(Some(0.0)), None);
        assert_eq!(format_american(Some(1.0)), None);
        assert_eq!(format_american(Some(-0.2)), None);
        assert_eq!(format_american(Some(f64::NAN)), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(-150.5), -150);
        assert_eq!(round_half_up(150.5), 151);
        assert_eq!(round_half_up(-149.6), -150);
    }

    #[test]
    fn test_track_issues_ticket_only_on_pair_change() {
        let mut state = OddsState::default();
        let ticket = state.track(Some(TeamPair::new("A", "B")));
        assert!(ticket.is_some());
        assert!(state.is_loading());

        assert_eq!(state.track(Some(TeamPair::new("A", "B"))), None);

        let next = state.track(Some(TeamPair::new("C", "D"))).unwrap();
        assert_eq!(next.pair, TeamPair::new("C", "D"));
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_track_none_clears_state() {
        let mut state = OddsState::default();
        let ticket = state.track(Some(TeamPair::new("A", "B"))).unwrap();
        state.resolve(&ticket, Ok(priced(0.6, 0.4)));

        assert_eq!(state.track(None), None);
        assert!(state.odds().is_none());
        assert!(!state.is_loading());
        assert!(state.cells().is_none());
    }

    #[test]
    fn test_late_response_for_previous_pair_is_discarded() {
        let mut state = OddsState::default();
        let p1 = state.track(Some(TeamPair::new("A", "B"))).unwrap();
        let p2 = state.track(Some(TeamPair::new("C", "D"))).unwrap();

        assert!(state.resolve(&p2, Ok(priced(0.7, 0.3))));
        assert!(!state.resolve(&p1, Ok(priced(0.1, 0.9))));

        assert_eq!(state.odds(), Some(&priced(0.7, 0.3)));
    }

    #[test]
    fn test_returning_to_a_pair_ignores_its_first_request() {
        let mut state = OddsState::default();
        let first = state.track(Some(TeamPair::new("A", "B"))).unwrap();
        state.track(Some(TeamPair::new("C", "D")));
        let again = state.track(Some(TeamPair::new("A", "B"))).unwrap();

        assert!(!state.resolve(&first, Ok(priced(0.2, 0.8))));
        assert!(state.is_loading());
        assert!(state.resolve(&again, Ok(priced(0.6, 0.4))));
        assert_eq!(state.odds(), Some(&priced(0.6, 0.4)));
    }

    #[test]
    fn test_failure_leaves_odds_unresolved() {
        let mut state = OddsState::default();
        let ticket = state.track(Some(TeamPair::new("A", "B"))).unwrap();
        assert!(state.resolve(&ticket, Err("timeout".to_string())));

        assert!(!state.is_loading());
        assert!(state.odds().is_none());
        assert!(state.cells().is_none());
    }

    #[test]
    fn test_cells() {
        let mut state = OddsState::default();
        let ticket = state.track(Some(TeamPair::new("A", "B"))).unwrap();
        assert_eq!(state.cells(), Some((OddsCell::Pending, OddsCell::Pending)));

        state.resolve(
            &ticket,
            Ok(Odds {
                team1_odds: Some(0.6),
                team2_odds: None,
                market_url: Some("https://polymarket.com/val-a-b".to_string()),
            }),
        );
        let (left, right) = state.cells().unwrap();
        assert_eq!(left.text(), "-150");
        assert_eq!(right.text(), NOT_AVAILABLE);
        assert_eq!(state.market_url(), Some("https://polymarket.com/val-a-b"));
    }
}
