//! Match odds backed by the Polymarket gamma search.

use super::OddsSource;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::state::Odds;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Short slugs Polymarket uses for well-known teams.
const TEAM_ABBREVIATIONS: &[(&str, &str)] = &[
    ("100 thieves", "100t"),
    ("100t", "100t"),
    ("mibr", "mibr"),
    ("nrg", "nrg"),
    ("g2 esports", "g2"),
    ("g2", "g2"),
    ("sentinels", "sentinels"),
    ("fnatic", "fnatic"),
    ("team liquid", "tl"),
    ("paper rex", "prx"),
    ("loud", "loud"),
    ("kru esports", "kru"),
    ("kru", "kru"),
    ("koi", "koi"),
    ("drx", "drx"),
];

/// Market slug for a team name.
pub fn team_slug(team: &str) -> String {
    let lower = team.to_lowercase();
    TEAM_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, abbr)| abbr.to_string())
        .unwrap_or_else(|| lower.chars().filter(|c| c.is_alphanumeric()).collect())
}

/// Pick the market for `team1` vs `team2` out of a search response.
///
/// The first result whose question names both teams wins; results without an
/// `outcomes` array are skipped.
pub fn select_market(body: &Value, team1: &str, team2: &str, base_url: &str) -> Option<Odds> {
    let team1_lower = team1.to_lowercase();
    let team2_lower = team2.to_lowercase();

    body.get("results")?.as_array()?.iter().find_map(|result| {
        let question = result.get("question")?.as_str()?.to_lowercase();
        if !question.contains(&team1_lower) || !question.contains(&team2_lower) {
            return None;
        }
        let outcomes = result.get("outcomes")?.as_array()?;

        let mut odds = Odds::default();
        for outcome in outcomes {
            let (Some(title), Some(price)) = (
                outcome.get("title").and_then(Value::as_str),
                outcome.get("price").and_then(Value::as_str),
            ) else {
                continue;
            };
            let price = price.trim().parse::<f64>().ok();
            let title = title.to_lowercase();
            if title.contains(&team1_lower) {
                odds.team1_odds = price;
            } else if title.contains(&team2_lower) {
                odds.team2_odds = price;
            }
        }

        odds.market_url = result
            .get("slug")
            .and_then(Value::as_str)
            .map(|slug| format!("{}/{}", base_url.trim_end_matches('/'), slug));
        Some(odds)
    })
}

/// HTTP client for Polymarket market search.
#[derive(Debug, Clone)]
pub struct PolymarketClient {
    client: Client,
    search_url: String,
    market_base_url: String,
    search_limit: u32,
}

impl PolymarketClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            search_url: config.odds_search_url.clone(),
            market_base_url: config.market_base_url.trim_end_matches('/').to_string(),
            search_limit: config.search_limit,
        })
    }

    /// Best-guess market page used when search finds nothing.
    pub fn fallback_market_url(&self, team1: &str, team2: &str, date: NaiveDate) -> String {
        format!(
            "{}/sports/valorant/games/week/1/val-{}-{}-{}",
            self.market_base_url,
            team_slug(team1),
            team_slug(team2),
            date.format("%Y-%m-%d")
        )
    }
}

#[async_trait]
impl OddsSource for PolymarketClient {
    async fn fetch_odds(&self, team1: &str, team2: &str) -> Result<Odds> {
        let fallback = self.fallback_market_url(team1, team2, Local::now().date_naive());
        let query = format!("{} vs {}", team1, team2);
        let limit = self.search_limit.to_string();

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query.as_str()), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), %query, "market search failed");
            return Ok(Odds::unpriced(fallback));
        }

        let body: Value = response.json().await?;
        match select_market(&body, team1, team2, &self.market_base_url) {
            Some(mut odds) => {
                odds.market_url.get_or_insert(fallback);
                Ok(odds)
            }
            None => {
                debug!(%query, "no market found");
                Ok(Odds::unpriced(fallback))
            }
        }
    }
}
