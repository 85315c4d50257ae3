//! Light/dark theme preference.

use crate::config::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "valorant-menubar-theme";

/// The widget's colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Read the stored theme. Absent, unknown, or unreadable values give `Dark`.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_default(),
            Ok(None) => Self::default(),
            Err(e) => {
                debug!(error = %e, "theme preference unavailable, using default");
                Self::default()
            }
        }
    }

    /// Write the theme back. Failures are logged and otherwise ignored.
    pub fn persist(self, store: &dyn PreferenceStore) {
        match store.set(THEME_KEY, self.as_str()) {
            Ok(()) => info!(theme = self.as_str(), "theme saved"),
            Err(e) => debug!(error = %e, "could not save theme preference"),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(crate::Error::preference(format!("unknown theme '{}'", other))),
        }
    }
}
