//! External data sources.
//!
//! The widget consumes two collaborators: a [`MatchSource`] returning the live
//! match list and an [`OddsSource`] pricing a team pairing. HTTP-backed
//! implementations talk to vlrggapi and the Polymarket gamma search; the demo
//! source serves canned data for offline use.

mod converter;
mod demo;
mod polymarket;
mod vlr;

pub use converter::{DataConverter, parse_leading_int};
pub use demo::DemoSource;
pub use polymarket::{PolymarketClient, select_market, team_slug};
pub use vlr::{LiveScoreData, LiveScoreResponse, MatchSegment, VlrClient};

use crate::error::Result;
use crate::state::{Match, Odds};
use async_trait::async_trait;

/// Source of live match snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Fetch the current live matches in source order.
    ///
    /// An absent payload is reported as an empty list.
    async fn fetch_live_matches(&self) -> Result<Vec<Match>>;
}

/// Source of prediction-market odds for a pairing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Look up odds for `team1` vs `team2`.
    async fn fetch_odds(&self, team1: &str, team2: &str) -> Result<Odds>;
}
