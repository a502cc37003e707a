//! Recurring live refresh of the rate store

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use super::currency::RateSnapshot;
use super::error::FetchError;
use super::store::RateStore;

/// Default period between scheduled live fetches.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Completion of a single live fetch.
#[derive(Debug)]
pub enum RefreshEvent {
    Updated(Arc<RateSnapshot>),
    Failed(FetchError),
}

/// Owns the periodic refresh timer. The timer task is aborted on
/// [`RefreshScheduler::shutdown`] or when the scheduler is dropped.
pub struct RefreshScheduler {
    store: Arc<RateStore>,
    events: UnboundedSender<RefreshEvent>,
    timer: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Fetches once right away and then every `period`.
    pub fn start(
        store: Arc<RateStore>,
        period: Duration,
        events: UnboundedSender<RefreshEvent>,
    ) -> Self {
        let timer = {
            let store = Arc::clone(&store);
            let events = events.clone();
            tokio::spawn(async move {
                let mut ticker = interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    debug!("Scheduled rates refresh");
                    refresh_once(&store, &events).await;
                }
            })
        };

        Self {
            store,
            events,
            timer,
        }
    }

    /// Starts an extra fetch alongside any that may be in flight.
    pub fn refresh_now(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let events = self.events.clone();
        tokio::spawn(async move {
            debug!("Manual rates refresh");
            refresh_once(&store, &events).await;
        })
    }

    pub fn shutdown(self) {
        self.timer.abort();
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

async fn refresh_once(store: &RateStore, events: &UnboundedSender<RefreshEvent>) {
    let event = match store.fetch_live().await {
        Ok(snapshot) => RefreshEvent::Updated(snapshot),
        Err(e) => RefreshEvent::Failed(e),
    };
    // The receiver is gone once the session has ended.
    let _ = events.send(event);
}
