//! Auto-hide on focus loss.

use crate::error::{Error, Result};
use crate::state::Action;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::debug;

/// The platform surface the widget is drawn on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WindowHost: Send + Sync {
    /// Whether the surface currently has input focus.
    async fn is_focused(&self) -> Result<bool>;

    /// Hide the surface.
    async fn hide(&self) -> Result<()>;
}

/// The terminal as a [`WindowHost`].
///
/// Focus is fed in from terminal focus events; hiding collapses the widget
/// to its ticker line.
#[derive(Debug, Clone)]
pub struct TerminalWindow {
    focused: Arc<AtomicBool>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl TerminalWindow {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            focused: Arc::new(AtomicBool::new(true)),
            action_tx,
        }
    }

    /// Record a focus change reported by the terminal.
    pub fn set_focused(&self, focused: bool) {
        self.focused.store(focused, Ordering::SeqCst);
    }
}

#[async_trait]
impl WindowHost for TerminalWindow {
    async fn is_focused(&self) -> Result<bool> {
        Ok(self.focused.load(Ordering::SeqCst))
    }

    async fn hide(&self) -> Result<()> {
        self.action_tx
            .send(Action::Hide)
            .map_err(|e| Error::window(e.to_string()))
    }
}

/// Hides the surface once focus has stayed away for the settle delay.
///
/// Clicking inside the widget can make focus leave and return within a few
/// milliseconds; rechecking after the delay filters that flicker out.
pub struct VisibilityGuard {
    host: Arc<dyn WindowHost>,
    settle: Duration,
    pending: JoinSet<bool>,
}

impl VisibilityGuard {
    pub fn new(host: Arc<dyn WindowHost>, settle: Duration) -> Self {
        Self {
            host,
            settle,
            pending: JoinSet::new(),
        }
    }

    /// Arm a settle timer. Earlier timers keep running; each rechecks focus
    /// on its own, so a regained focus makes all of them no-ops.
    pub fn on_focus_lost(&mut self) {
        while self.pending.try_join_next().is_some() {}

        let host = Arc::clone(&self.host);
        let settle = self.settle;
        self.pending.spawn(settle_then_hide(host, settle));
    }

    /// Number of armed timers not yet reaped.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Wait `settle`, then hide if the host is still unfocused.
///
/// Returns whether the surface was hidden. Host errors are swallowed and
/// count as "do not hide".
pub async fn settle_then_hide(host: Arc<dyn WindowHost>, settle: Duration) -> bool {
    tokio::time::sleep(settle).await;

    match host.is_focused().await {
        Ok(true) => false,
        Ok(false) => match host.hide().await {
            Ok(()) => {
                debug!("focus lost, hiding widget");
                true
            }
            Err(e) => {
                debug!(error = %e, "could not hide widget");
                false
            }
        },
        Err(e) => {
            debug!(error = %e, "focus state unknown, leaving widget visible");
            false
        }
    }
}
