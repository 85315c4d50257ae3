//! Odds lookups for the match on screen.

use crate::api::OddsSource;
use crate::state::{Action, OddsTicket};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::debug;

/// Issues odds lookups and reports them back as [`Action::OddsResolved`].
///
/// Superseded lookups are not aborted; the ticket they carry is stale by the
/// time they report, so `OddsState` drops them. Pending lookups are aborted
/// when the resolver is dropped.
pub struct OddsResolver {
    source: Arc<dyn OddsSource>,
    action_tx: mpsc::UnboundedSender<Action>,
    in_flight: JoinSet<()>,
}

impl OddsResolver {
    pub fn new(source: Arc<dyn OddsSource>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            source,
            action_tx,
            in_flight: JoinSet::new(),
        }
    }

    /// Start a lookup for the ticket's pair.
    pub fn fetch(&mut self, ticket: OddsTicket) {
        while self.in_flight.try_join_next().is_some() {}

        let source = Arc::clone(&self.source);
        let tx = self.action_tx.clone();

        debug!(ticket = ticket.id, pair = %ticket.pair, "requesting odds");
        self.in_flight.spawn(async move {
            let result = source
                .fetch_odds(&ticket.pair.team1, &ticket.pair.team2)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Action::OddsResolved { ticket, result });
        });
    }

    /// Number of lookups not yet reaped.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }
}
