//! Canned data for running without network access.

use super::{MatchSource, OddsSource};
use crate::error::Result;
use crate::state::{LIVE_SENTINEL, Match, Odds};
use async_trait::async_trait;

/// Serves five fixed live matches and the same odds for every pairing.
#[derive(Debug, Clone, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }

    pub fn matches() -> Vec<Match> {
        let live = |team1: &str, team2: &str, score: (u32, u32), map: &str, event: &str, n| Match {
            score1: score.0,
            score2: score.1,
            current_map: Some(map.to_string()),
            map_number: Some(n),
            match_event: Some(event.to_string()),
            match_series: Some("Regular Season".to_string()),
            time_until_match: LIVE_SENTINEL.to_string(),
            ..Match::new(team1, team2)
        };

        vec![
            Match {
                team1_round_ct: Some(7),
                team1_round_t: Some(6),
                team2_round_ct: Some(5),
                team2_round_t: Some(4),
                team1_logo: Some("https://owcdn.net/img/62e7a0e8f1c0b.png".to_string()),
                team2_logo: Some("https://owcdn.net/img/62e7a0e8f1c0b.png".to_string()),
                unix_timestamp: Some(1_713_996_000),
                match_page: Some("https://www.vlr.gg/12345".to_string()),
                ..live("Sentinels", "100 Thieves", (13, 9), "Ascent", "VCT 2025: Americas Stage 1", 1)
            },
            live("Fnatic", "Team Liquid", (7, 5), "Bind", "VCT 2025: EMEA Stage 1", 2),
            live("Paper Rex", "DRX", (10, 8), "Icebox", "VCT 2025: Pacific Stage 1", 1),
            live("LOUD", "KRÜ Esports", (6, 6), "Lotus", "VCT 2025: Americas Stage 1", 3),
            live("G2 Esports", "KOI", (12, 11), "Split", "VCT 2025: EMEA Stage 1", 2),
        ]
    }

    pub fn odds() -> Odds {
        Odds {
            team1_odds: Some(0.04),
            team2_odds: Some(0.96),
            market_url: Some(
                "https://polymarket.com/event/will-jesus-christ-return-before-2027".to_string(),
            ),
        }
    }
}

#[async_trait]
impl MatchSource for DemoSource {
    async fn fetch_live_matches(&self) -> Result<Vec<Match>> {
        Ok(Self::matches())
    }
}

#[async_trait]
impl OddsSource for DemoSource {
    async fn fetch_odds(&self, _team1: &str, _team2: &str) -> Result<Odds> {
        Ok(Self::odds())
    }
}
