//! Configuration settings for valbar.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that forces demo data on.
pub const DEMO_ENV: &str = "VALBAR_DEMO";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data source configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme palettes.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        let mut config = Self::load(None)?;
        config.apply_env_overrides(std::env::var(DEMO_ENV).ok().as_deref());
        Ok(config)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(Self::default_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::config(e.to_string()))
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(Self::default_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn default_path() -> PathBuf {
        super::config_dir()
            .map(|p| p.join("config.toml"))
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    }

    fn apply_env_overrides(&mut self, demo: Option<&str>) {
        if demo.is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes")) {
            self.api.demo_mode = true;
        }
    }
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Live-score endpoint returning the match feed.
    pub match_feed_url: String,
    /// Polymarket public search endpoint.
    pub odds_search_url: String,
    /// Base URL for market links.
    pub market_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Number of search results to scan for a market.
    pub search_limit: u32,
    /// Serve canned matches and odds instead of calling out.
    pub demo_mode: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            match_feed_url: "https://vlrggapi.vercel.app/v2/match?q=live_score".to_string(),
            odds_search_url: "https://gamma-api.polymarket.com/public-search".to_string(),
            market_base_url: "https://polymarket.com".to_string(),
            timeout_secs: 10,
            user_agent: "Valorant-Menubar-App".to_string(),
            search_limit: 10,
            demo_mode: false,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for redraws.
    pub tick_rate_ms: u64,
    /// Match feed refresh period in seconds.
    pub refresh_interval_secs: u64,
    /// How long focus must stay away before the widget hides.
    pub focus_settle_ms: u64,
    /// Collapse to the ticker line when focus is lost.
    pub auto_hide: bool,
    /// Game name shown in the header pill and ticker.
    pub game_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            refresh_interval_secs: 30,
            focus_settle_ms: 100,
            auto_hide: true,
            game_label: "Valorant".to_string(),
        }
    }
}

impl UiConfig {
    /// Redraw period, never shorter than one millisecond.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Refresh period, never shorter than one second.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    pub fn focus_settle(&self) -> Duration {
        Duration::from_millis(self.focus_settle_ms)
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Refresh the match feed now.
    pub refresh: String,
    /// Switch between light and dark.
    pub theme: String,
    /// Previous match.
    pub previous: String,
    /// Next match.
    pub next: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            refresh: "r".to_string(),
            theme: "t".to_string(),
            previous: "h".to_string(),
            next: "l".to_string(),
        }
    }
}

/// Theme configuration: one palette per scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub dark: Palette,
    pub light: Palette,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark: Palette::dark(),
            light: Palette::light(),
        }
    }
}

impl ThemeConfig {
    pub fn palette(&self, theme: crate::state::ThemePreference) -> &Palette {
        match theme {
            crate::state::ThemePreference::Dark => &self.dark,
            crate::state::ThemePreference::Light => &self.light,
        }
    }
}

/// A colour palette, every entry a hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub accent: String,
    pub live: String,
    pub favourite: String,
    pub underdog: String,
    pub border: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: "#0f1923".to_string(),
            foreground: "#ece8e1".to_string(),
            muted: "#768079".to_string(),
            accent: "#ff4655".to_string(),
            live: "#ff4655".to_string(),
            favourite: "#66bb6a".to_string(),
            underdog: "#ffa726".to_string(),
            border: "#364966".to_string(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: "#f5f5f0".to_string(),
            foreground: "#1f2326".to_string(),
            muted: "#6b7075".to_string(),
            accent: "#d93442".to_string(),
            live: "#d93442".to_string(),
            favourite: "#2e7d32".to_string(),
            underdog: "#e65100".to_string(),
            border: "#b8bcc2".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.ui.focus_settle(), Duration::from_millis(100));
        assert!(!config.api.demo_mode);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [ui]
            refresh_interval_secs = 60

            [keybindings]
            quit = "Ctrl+c"
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.refresh_interval_secs, 60);
        assert_eq!(config.ui.focus_settle_ms, 100);
        assert_eq!(config.keybindings.quit, "Ctrl+c");
        assert_eq!(config.keybindings.next, "l");
        assert_eq!(config.api.search_limit, 10);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml("ui = 3").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_zero_refresh_interval_is_floored() {
        let ui = UiConfig {
            refresh_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(ui.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_tick_rate_is_floored() {
        let config = Config::from_toml("[ui]\ntick_rate_ms = 0").unwrap();
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_demo_env_override() {
        let mut config = Config::default();
        config.apply_env_overrides(Some("0"));
        assert!(!config.api.demo_mode);
        config.apply_env_overrides(Some("1"));
        assert!(config.api.demo_mode);
    }
}
