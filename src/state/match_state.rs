//! Live match data and the feed refresh state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::TeamPair;

/// Sentinel `time_until_match` value for a match in progress.
pub const LIVE_SENTINEL: &str = "LIVE";

/// Fallback shown when the source does not know the map being played.
pub const UNKNOWN_MAP: &str = "Unknown Map";

/// Message used when a feed failure carries no text of its own.
pub const FEED_ERROR_FALLBACK: &str = "Failed to load matches";

/// One live (or upcoming) match as reported by the match source.
///
/// A `Match` is a snapshot: it is never mutated after receipt, a refresh
/// replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// First team display name; also half of the odds lookup key.
    pub team1: String,
    /// Second team display name.
    pub team2: String,
    /// Maps won by team 1.
    pub score1: u32,
    /// Maps won by team 2.
    pub score2: u32,
    pub team1_round_ct: Option<u32>,
    pub team1_round_t: Option<u32>,
    pub team2_round_ct: Option<u32>,
    pub team2_round_t: Option<u32>,
    /// Map currently being played.
    pub current_map: Option<String>,
    /// Position of the current map in the series.
    pub map_number: Option<u32>,
    pub match_series: Option<String>,
    pub match_event: Option<String>,
    pub team1_logo: Option<String>,
    pub team2_logo: Option<String>,
    /// `"LIVE"` for matches in progress, otherwise a countdown label.
    pub time_until_match: String,
    /// Link to the match page on the source site.
    pub match_page: Option<String>,
    /// Scheduled start as a unix timestamp.
    pub unix_timestamp: Option<i64>,
}

impl Match {
    /// Create a match between two teams with everything else unset.
    pub fn new(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
            ..Default::default()
        }
    }

    /// Whether the match is currently being played.
    pub fn is_live(&self) -> bool {
        self.time_until_match == LIVE_SENTINEL
    }

    /// Whether the series score is level.
    pub fn is_tied(&self) -> bool {
        self.score1 == self.score2
    }

    /// Rounds won by team 1 on the current map (CT + T side).
    pub fn rounds1(&self) -> u32 {
        self.team1_round_ct.unwrap_or(0) + self.team1_round_t.unwrap_or(0)
    }

    /// Rounds won by team 2 on the current map (CT + T side).
    pub fn rounds2(&self) -> u32 {
        self.team2_round_ct.unwrap_or(0) + self.team2_round_t.unwrap_or(0)
    }

    /// Round data is derived, never stored: present iff either side has rounds.
    pub fn has_round_data(&self) -> bool {
        self.rounds1() > 0 || self.rounds2() > 0
    }

    /// Map name, falling back to [`UNKNOWN_MAP`].
    pub fn map_name(&self) -> &str {
        self.current_map
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(UNKNOWN_MAP)
    }

    /// Upper-cased map header, e.g. `MAP 2 • BIND`.
    pub fn map_label(&self) -> String {
        match self.map_number {
            Some(number) => format!("Map {} • {}", number, self.map_name()).to_uppercase(),
            None => self.map_name().to_uppercase(),
        }
    }

    /// Series label, falling back to the event name and then to `Series`.
    pub fn series_label(&self) -> &str {
        self.match_series
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.match_event.as_deref().filter(|e| !e.is_empty()))
            .unwrap_or("Series")
    }

    /// Event name shown under the card, if any.
    pub fn event_label(&self) -> Option<&str> {
        self.match_event.as_deref().filter(|e| !e.is_empty())
    }

    /// Series score as shown on the card.
    pub fn score_line(&self) -> String {
        format!("{} : {}", self.score1, self.score2)
    }

    /// The identity used to key odds lookups.
    pub fn team_pair(&self) -> TeamPair {
        TeamPair::new(&self.team1, &self.team2)
    }

    /// One-line summary used by the collapsed ticker.
    pub fn ticker_text(&self) -> String {
        let teams = format!("{} vs {}", self.team1, self.team2);
        let score = format!("{} - {}", self.score1, self.score2);

        if self.is_live() {
            format!("{} | {} | {}", teams, score, self.map_name())
        } else if !self.time_until_match.is_empty() {
            format!("{} | {} | {}", teams, score, self.time_until_match)
        } else {
            format!("{} | {}", teams, score)
        }
    }
}

/// Identifies one issued feed refresh.
///
/// Only the most recently issued refresh may commit its result, so an older
/// request that finishes late cannot overwrite a newer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// State of the live match feed.
#[derive(Debug)]
pub struct MatchFeedState {
    /// Matches in source order.
    pub matches: Vec<Match>,
    /// Whether a refresh is in flight.
    pub loading: bool,
    /// Message from the last failed refresh.
    pub error: Option<String>,
    /// When the list was last replaced.
    pub last_updated: Option<DateTime<Utc>>,
    issued: u64,
}

impl Default for MatchFeedState {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            loading: true,
            error: None,
            last_updated: None,
            issued: 0,
        }
    }
}

impl MatchFeedState {
    /// Mark a new refresh as in flight and hand out its token.
    pub fn begin_refresh(&mut self) -> RefreshToken {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        RefreshToken(self.issued)
    }

    /// Apply the outcome of a refresh.
    ///
    /// Returns `false` when the token has been superseded and the result was
    /// dropped. On failure the current list is kept untouched.
    pub fn complete_refresh(
        &mut self,
        token: RefreshToken,
        result: std::result::Result<Vec<Match>, String>,
    ) -> bool {
        if token.0 != self.issued {
            debug!(
                token = token.0,
                latest = self.issued,
                "discarding superseded feed refresh"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(matches) => {
                debug!(count = matches.len(), "match feed refreshed");
                self.matches = matches;
                self.last_updated = Some(Utc::now());
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    FEED_ERROR_FALLBACK.to_string()
                } else {
                    message
                };
                warn!(error = %message, "match feed refresh failed");
                self.error = Some(message);
            }
        }
        true
    }

    /// Whether any refresh has succeeded yet.
    pub fn has_loaded(&self) -> bool {
        self.last_updated.is_some()
    }

    /// Footer text, e.g. `3 live matches`.
    pub fn count_label(&self) -> String {
        let n = self.matches.len();
        format!("{} live match{}", n, if n == 1 { "" } else { "es" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn live(team1: &str, team2: &str) -> Match {
        Match {
            time_until_match: LIVE_SENTINEL.to_string(),
            ..Match::new(team1, team2)
        }
    }

    #[test]
    fn test_initial_feed_state_is_loading() {
        let feed = MatchFeedState::default();
        assert!(feed.loading);
        assert!(feed.matches.is_empty());
        assert!(feed.error.is_none());
        assert!(!feed.has_loaded());
    }

    #[test]
    fn test_refresh_success_replaces_list() {
        let mut feed = MatchFeedState::default();
        let token = feed.begin_refresh();
        assert!(feed.complete_refresh(token, Ok(vec![live("A", "B"), live("C", "D")])));

        assert!(!feed.loading);
        assert_eq!(feed.matches.len(), 2);
        assert!(feed.has_loaded());
    }

    #[test]
    fn test_refresh_failure_keeps_stale_matches() {
        let mut feed = MatchFeedState::default();
        let token = feed.begin_refresh();
        feed.complete_refresh(token, Ok(vec![live("A", "B")]));

        let token = feed.begin_refresh();
        assert!(feed.error.is_none());
        feed.complete_refresh(token, Err("connection reset".to_string()));

        assert!(!feed.loading);
        assert_eq!(feed.matches, vec![live("A", "B")]);
        assert_eq!(feed.error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_refresh_failure_without_message_uses_fallback() {
        let mut feed = MatchFeedState::default();
        let token = feed.begin_refresh();
        feed.complete_refresh(token, Err("  ".to_string()));
        assert_eq!(feed.error.as_deref(), Some(FEED_ERROR_FALLBACK));
    }

    #[test]
    fn test_begin_refresh_clears_previous_error() {
        let mut feed = MatchFeedState::default();
        let token = feed.begin_refresh();
        feed.complete_refresh(token, Err("boom".to_string()));
        feed.begin_refresh();
        assert!(feed.error.is_none());
        assert!(feed.loading);
    }

    #[test]
    fn test_superseded_refresh_is_discarded() {
        let mut feed = MatchFeedState::default();
        let first = feed.begin_refresh();
        let second = feed.begin_refresh();

        assert!(feed.complete_refresh(second, Ok(vec![live("New", "List")])));
        assert!(!feed.complete_refresh(first, Ok(vec![live("Old", "List")])));

        assert_eq!(feed.matches[0].team1, "New");
    }

    #[test]
    fn test_stale_completion_leaves_newer_refresh_loading() {
        let mut feed = MatchFeedState::default();
        let first = feed.begin_refresh();
        let _second = feed.begin_refresh();

        feed.complete_refresh(first, Ok(Vec::new()));
        assert!(feed.loading);
    }

    #[test]
    fn test_round_data_is_derived() {
        let mut m = live("Sentinels", "100 Thieves");
        assert!(!m.has_round_data());

        m.team1_round_ct = Some(7);
        m.team1_round_t = Some(6);
        m.team2_round_t = Some(4);
        assert_eq!(m.rounds1(), 13);
        assert_eq!(m.rounds2(), 4);
        assert!(m.has_round_data());
    }

    #[test]
    fn test_map_label() {
        let mut m = live("A", "B");
        assert_eq!(m.map_label(), "UNKNOWN MAP");

        m.current_map = Some("Ascent".to_string());
        assert_eq!(m.map_label(), "ASCENT");

        m.map_number = Some(2);
        assert_eq!(m.map_label(), "MAP 2 • ASCENT");
    }

    #[test]
    fn test_series_label_fallbacks() {
        let mut m = live("A", "B");
        assert_eq!(m.series_label(), "Series");

        m.match_event = Some("VCT 2025: EMEA Stage 1".to_string());
        assert_eq!(m.series_label(), "VCT 2025: EMEA Stage 1");

        m.match_series = Some("Regular Season".to_string());
        assert_eq!(m.series_label(), "Regular Season");
    }

    #[test]
    fn test_ticker_text() {
        let mut m = live("Sentinels", "100 Thieves");
        m.score1 = 1;
        m.current_map = Some("Ascent".to_string());
        assert_eq!(m.ticker_text(), "Sentinels vs 100 Thieves | 1 - 0 | Ascent");

        m.time_until_match = "2h 10m".to_string();
        assert_eq!(m.ticker_text(), "Sentinels vs 100 Thieves | 1 - 0 | 2h 10m");

        m.time_until_match.clear();
        assert_eq!(m.ticker_text(), "Sentinels vs 100 Thieves | 1 - 0");
    }

    #[test]
    fn test_count_label() {
        let mut feed = MatchFeedState::default();
        assert_eq!(feed.count_label(), "0 live matches");
        feed.matches.push(live("A", "B"));
        assert_eq!(feed.count_label(), "1 live match");
    }
}
