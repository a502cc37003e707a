use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, instrument, warn};

use super::currency::{CurrencyRateProvider, RateSnapshot};
use super::error::FetchError;
use super::seed;

/// Holds the current best-known rates.
///
/// The snapshot is only ever replaced as a whole, so readers always see a
/// complete set of rates.
pub struct RateStore {
    snapshot: RwLock<Arc<RateSnapshot>>,
    provider: Arc<dyn CurrencyRateProvider>,
}

impl RateStore {
    pub fn new(initial: RateSnapshot, provider: Arc<dyn CurrencyRateProvider>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(initial)),
            provider,
        }
    }

    /// Creates a store primed from the seed file (or the built-in rates).
    pub fn from_seed<P: AsRef<Path>>(path: P, provider: Arc<dyn CurrencyRateProvider>) -> Self {
        Self::new(seed::load_seed(path), provider)
    }

    pub fn current_snapshot(&self) -> Arc<RateSnapshot> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Fetches live rates and, on success, replaces the held snapshot.
    #[instrument(name = "LiveRatesFetch", skip(self))]
    pub async fn fetch_live(&self) -> Result<Arc<RateSnapshot>, FetchError> {
        match self.provider.fetch_rates().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.replace(Arc::clone(&snapshot));
                debug!(count = snapshot.len(), "Replaced rate snapshot");
                Ok(snapshot)
            }
            Err(e) => {
                warn!(error = %e, "Keeping previous rates");
                Err(e)
            }
        }
    }

    fn replace(&self, snapshot: Arc<RateSnapshot>) {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }
}
