//! Live match feed backed by vlrggapi.

use super::{DataConverter, MatchSource};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::state::Match;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level live-score response.
#[derive(Debug, Default, Deserialize)]
pub struct LiveScoreResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<LiveScoreData>,
}

/// The `data` envelope of a live-score response.
#[derive(Debug, Default, Deserialize)]
pub struct LiveScoreData {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub segments: Vec<MatchSegment>,
}

impl LiveScoreResponse {
    /// Unwrap into matches, treating a missing payload as no matches.
    pub fn into_matches(self) -> Vec<Match> {
        self.data
            .map(|data| data.segments)
            .unwrap_or_default()
            .into_iter()
            .map(DataConverter::convert_segment)
            .collect()
    }
}

/// One match as served by the live-score endpoint. Every field is a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSegment {
    pub team1: String,
    pub team2: String,
    pub score1: String,
    pub score2: String,
    #[serde(default)]
    pub current_map: String,
    #[serde(default)]
    pub match_event: String,
    #[serde(default)]
    pub match_series: String,
    #[serde(default)]
    pub time_until_match: String,
    #[serde(default)]
    pub flag1: String,
    #[serde(default)]
    pub flag2: String,
    #[serde(default)]
    pub team1_logo: String,
    #[serde(default)]
    pub team2_logo: String,
    #[serde(default)]
    pub team1_round_ct: String,
    #[serde(default)]
    pub team1_round_t: String,
    #[serde(default)]
    pub team2_round_ct: String,
    #[serde(default)]
    pub team2_round_t: String,
    #[serde(default)]
    pub map_number: String,
    #[serde(default)]
    pub unix_timestamp: String,
    #[serde(default)]
    pub match_page: String,
}

/// HTTP client for the live-score endpoint.
#[derive(Debug, Clone)]
pub struct VlrClient {
    client: Client,
    url: String,
}

impl VlrClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            url: config.match_feed_url.clone(),
        })
    }
}

#[async_trait]
impl MatchSource for VlrClient {
    async fn fetch_live_matches(&self) -> Result<Vec<Match>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body: LiveScoreResponse = response.json().await?;

        let matches = body.into_matches();
        debug!(count = matches.len(), "fetched live matches");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_live_score_response() {
        let body: LiveScoreResponse = serde_json::from_str(
            r#"{
                "status": "success",
                "data": {
                    "status": 200,
                    "segments": [{
                        "team1": "Fnatic",
                        "team2": "Team Liquid",
                        "score1": "1",
                        "score2": "1",
                        "current_map": "Bind",
                        "match_event": "VCT 2025: EMEA Stage 1",
                        "time_until_match": "LIVE",
                        "map_number": "3"
                    }]
                }
            }"#,
        )
        .unwrap();

        let matches = body.into_matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].team2, "Team Liquid");
        assert_eq!(matches[0].map_label(), "MAP 3 • BIND");
        assert!(matches[0].is_tied());
    }

    #[test]
    fn test_missing_payload_is_empty() {
        let body: LiveScoreResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(body.into_matches().is_empty());

        let body: LiveScoreResponse =
            serde_json::from_str(r#"{"data": {"status": 200}}"#).unwrap();
        assert!(body.into_matches().is_empty());
    }

    #[test]
    fn test_segment_without_team_is_rejected() {
        let body = serde_json::from_str::<LiveScoreResponse>(
            r#"{"data": {"segments": [{"team1": "A", "score1": "0", "score2": "0"}]}}"#,
        );
        assert!(body.is_err());
    }
}
