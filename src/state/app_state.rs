//! Application-level state.

use super::ThemePreference;

/// Global application state.
#[derive(Debug)]
pub struct AppState {
    /// Active colour scheme.
    pub theme: ThemePreference,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Whether the terminal currently has input focus.
    pub focused: bool,
    /// Whether the widget is collapsed to the ticker line.
    pub hidden: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            show_help: false,
            focused: true,
            hidden: false,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Create application state with a preloaded theme.
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}
