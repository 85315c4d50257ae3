//! The widget's data engine, independent of the terminal.
//!
//! A [`Session`] wires the store to its controllers: it reduces actions,
//! issues feed refreshes, re-keys odds whenever the selected pair changes and
//! arms the visibility guard on focus loss.

use crate::api::{MatchSource, OddsSource};
use crate::config::{PreferenceStore, UiConfig};
use crate::error::{Error, Result};
use crate::state::{Action, Store, ThemePreference};
use crate::sync::{MatchFeedController, OddsResolver, VisibilityGuard, WindowHost};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// One UI session: store, controllers, and the action channel between them.
pub struct Session {
    store: Store,
    feed: MatchFeedController,
    odds: OddsResolver,
    visibility: Option<VisibilityGuard>,
    preferences: Box<dyn PreferenceStore>,
    settle: Duration,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl Session {
    /// Create a session. The theme is read from `preferences` once, here.
    pub fn new(
        ui: &UiConfig,
        matches: Arc<dyn MatchSource>,
        odds: Arc<dyn OddsSource>,
        preferences: Box<dyn PreferenceStore>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let theme = ThemePreference::load(preferences.as_ref());
        info!(theme = theme.as_str(), "session created");

        Self {
            store: Store::with_theme(theme),
            feed: MatchFeedController::new(matches, action_tx.clone(), ui.refresh_interval()),
            odds: OddsResolver::new(odds, action_tx.clone()),
            visibility: None,
            preferences,
            settle: ui.focus_settle(),
            action_tx,
            action_rx,
        }
    }

    /// Sender for collaborators that report back into this session.
    pub fn dispatcher(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Queue an action for the next loop iteration.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| Error::channel(e.to_string()))
    }

    /// Install the focus-loss listener. Only the first call has any effect.
    pub fn install_visibility_guard(&mut self, host: Arc<dyn WindowHost>) {
        if self.visibility.is_none() {
            self.visibility = Some(VisibilityGuard::new(host, self.settle));
        }
    }

    /// Start the refresh timer.
    pub fn start(&mut self) {
        self.feed.start();
    }

    /// Tear down timers, listeners, and pending lookups.
    pub fn shutdown(&mut self) {
        self.feed.stop();
        self.visibility = None;
        info!("session closed");
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Wait for the next action from a background task.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Take an already queued action without waiting.
    pub fn try_next_action(&mut self) -> Option<Action> {
        self.action_rx.try_recv().ok()
    }

    /// Apply an action and start whatever work it implies.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::RefreshMatches => {
                let token = self.store.feed.begin_refresh();
                self.feed.fetch(token);
            }
            Action::FocusLost => {
                self.store.reduce(Action::FocusLost);
                if let Some(guard) = &mut self.visibility {
                    guard.on_focus_lost();
                }
            }
            Action::ToggleTheme => {
                self.store.reduce(Action::ToggleTheme);
                self.store.app.theme.persist(self.preferences.as_ref());
            }
            other => self.store.reduce(other),
        }

        if let Some(ticket) = self.store.track_selected_pair() {
            self.odds.fetch(ticket);
        }
    }
}
