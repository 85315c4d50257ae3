//! Periodic match feed refresh.

use crate::api::MatchSource;
use crate::state::{Action, FEED_ERROR_FALLBACK, RefreshToken};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Owns the refresh timer and issues fetches against the match source.
///
/// Fetch results come back as [`Action::MatchesLoaded`]; the timer only
/// dispatches [`Action::RefreshMatches`] so manual and timed refreshes take
/// the same path.
pub struct MatchFeedController {
    source: Arc<dyn MatchSource>,
    action_tx: mpsc::UnboundedSender<Action>,
    period: Duration,
    timer: Option<JoinHandle<()>>,
}

impl MatchFeedController {
    pub fn new(
        source: Arc<dyn MatchSource>,
        action_tx: mpsc::UnboundedSender<Action>,
        period: Duration,
    ) -> Self {
        Self {
            source,
            action_tx,
            period,
            timer: None,
        }
    }

    /// Start the timer: one refresh right away, then one per period.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let tx = self.action_tx.clone();
        let period = self.period;
        self.timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Action::RefreshMatches).is_err() {
                    break;
                }
            }
        }));
        info!(period_secs = period.as_secs(), "match feed started");
    }

    /// Cancel the timer. In-flight fetches finish but nobody listens.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            info!("match feed stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Fetch once on behalf of `token`.
    pub fn fetch(&self, token: RefreshToken) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let tx = self.action_tx.clone();

        debug!(token = token.value(), "refreshing match feed");
        tokio::spawn(async move {
            let result = source
                .fetch_live_matches()
                .await
                .map_err(|e| describe_failure(&e));
            let _ = tx.send(Action::MatchesLoaded { token, result });
        })
    }
}

impl Drop for MatchFeedController {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Human-readable text for a failed fetch.
fn describe_failure(error: &crate::Error) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        FEED_ERROR_FALLBACK.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMatchSource;
    use crate::state::{Match, MatchFeedState};
    use crate::Error;
    use tokio::time::Instant;

    fn controller(source: MockMatchSource, period: Duration) -> (MatchFeedController, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (MatchFeedController::new(Arc::new(source), tx, period), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_immediately_then_every_period() {
        let (mut feed, mut rx) = controller(MockMatchSource::new(), Duration::from_secs(30));
        let started = Instant::now();
        feed.start();

        assert!(matches!(rx.recv().await, Some(Action::RefreshMatches)));
        assert_eq!(started.elapsed(), Duration::ZERO);

        assert!(matches!(rx.recv().await, Some(Action::RefreshMatches)));
        assert_eq!(started.elapsed(), Duration::from_secs(30));

        assert!(matches!(rx.recv().await, Some(Action::RefreshMatches)));
        assert_eq!(started.elapsed(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer() {
        let (mut feed, mut rx) = controller(MockMatchSource::new(), Duration::from_secs(30));
        feed.start();
        assert!(matches!(rx.recv().await, Some(Action::RefreshMatches)));

        feed.stop();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(rx.try_recv().is_err());
        assert!(!feed.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (mut feed, mut rx) = controller(MockMatchSource::new(), Duration::from_secs(30));
        feed.start();
        assert!(matches!(rx.recv().await, Some(Action::RefreshMatches)));
        drop(feed);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_fetch_reports_matches() {
        let mut source = MockMatchSource::new();
        source
            .expect_fetch_live_matches()
            .times(1)
            .returning(|| Ok(vec![Match::new("A", "B")]));
        let (feed, mut rx) = controller(source, Duration::from_secs(30));

        let mut state = MatchFeedState::default();
        let token = state.begin_refresh();
        feed.fetch(token).await.unwrap();

        match rx.recv().await {
            Some(Action::MatchesLoaded { token: got, result }) => {
                assert_eq!(got, token);
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_reports_failure_message() {
        let mut source = MockMatchSource::new();
        source
            .expect_fetch_live_matches()
            .returning(|| Err(Error::source("")));
        let (feed, mut rx) = controller(source, Duration::from_secs(30));

        let token = MatchFeedState::default().begin_refresh();
        feed.fetch(token).await.unwrap();

        match rx.recv().await {
            Some(Action::MatchesLoaded { result: Err(message), .. }) => {
                assert_eq!(message, FEED_ERROR_FALLBACK);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
