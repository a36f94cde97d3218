//! Rate synchronization and currency conversion

use super::provider::RateProvider;
use super::store::RateStore;
use anyhow::Result;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What happened during a call to [`Converter::sync_rates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No API key is configured, nothing was requested.
    Skipped,
    /// The stored snapshot was replaced.
    Updated { currencies: usize },
    /// The provider could not be used; the previous snapshot is kept.
    Failed { reason: String },
}

impl Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncOutcome::Skipped => write!(f, "No API key configured, skipped sync"),
            SyncOutcome::Updated { currencies } => {
                write!(f, "Updated rates for {currencies} currencies")
            }
            SyncOutcome::Failed { reason } => {
                write!(f, "Sync failed, keeping previous rates: {reason}")
            }
        }
    }
}

/// Converts amounts with cached rates and refreshes the cache on demand.
///
/// Holds no state besides shared handles, so a single instance can serve
/// concurrent callers.
#[derive(Clone)]
pub struct Converter {
    store: Arc<dyn RateStore>,
    provider: Arc<dyn RateProvider>,
}

impl Converter {
    pub fn new(store: Arc<dyn RateStore>, provider: Arc<dyn RateProvider>) -> Self {
        Self { store, provider }
    }

    pub fn store(&self) -> &Arc<dyn RateStore> {
        &self.store
    }

    /// Replaces the cached rates with the provider's latest.
    ///
    /// Provider failures never surface as errors: they are reported in the
    /// outcome and the old snapshot stays in place. Only store failures are
    /// returned as `Err`.
    pub async fn sync_rates(&self) -> Result<SyncOutcome> {
        let api_key = match self.store.credential().await? {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                debug!("No API key configured, skipping rate sync");
                return Ok(SyncOutcome::Skipped);
            }
        };

        let snapshot = match self.provider.fetch_latest(&api_key).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Rate sync failed, keeping cached rates");
                return Ok(SyncOutcome::Failed {
                    reason: format!("{e:#}"),
                });
            }
        };

        let currencies = snapshot.len();
        self.store.set_rates(snapshot).await?;
        info!(currencies, "Exchange rates updated");

        Ok(SyncOutcome::Updated { currencies })
    }

    /// Converts `amount` between two currency codes using cached rates.
    ///
    /// Returns `Ok(None)` when no rates are cached, a code is unknown, or the
    /// rates cannot be divided.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Option<f64>> {
        let Some(snapshot) = self.store.rates().await? else {
            debug!("No cached rates available");
            return Ok(None);
        };

        let result = snapshot.convert(amount, from, to);
        debug!(amount, from, to, ?result, "Converted amount");
        Ok(result)
    }
}
