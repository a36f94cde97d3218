use crate::core::rates::RateSnapshot;
use crate::core::settings::AllowedCurrencies;
use crate::core::store::RateStore;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct Settings {
    api_key: Option<String>,
    rates: Option<RateSnapshot>,
    allowed: AllowedCurrencies,
}

/// In-memory settings store, lost when dropped
#[derive(Default)]
pub struct MemoryRateStore {
    inner: RwLock<Settings>,
}

impl MemoryRateStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateStore for MemoryRateStore {
    async fn credential(&self) -> Result<Option<String>> {
        Ok(self.inner.read().await.api_key.clone())
    }

    async fn set_credential(&self, api_key: String) -> Result<()> {
        self.inner.write().await.api_key = Some(api_key);
        debug!("Stored API key");
        Ok(())
    }

    async fn rates(&self) -> Result<Option<RateSnapshot>> {
        let settings = self.inner.read().await;
        if settings.rates.is_some() {
            debug!("Rates HIT");
        } else {
            debug!("Rates MISS");
        }
        Ok(settings.rates.clone())
    }

    async fn set_rates(&self, snapshot: RateSnapshot) -> Result<()> {
        debug!(currencies = snapshot.len(), "Rates PUT");
        self.inner.write().await.rates = Some(snapshot);
        Ok(())
    }

    async fn allowed_currencies(&self) -> Result<AllowedCurrencies> {
        Ok(self.inner.read().await.allowed.clone())
    }

    async fn set_allowed_currencies(&self, allowed: AllowedCurrencies) -> Result<()> {
        self.inner.write().await.allowed = allowed;
        Ok(())
    }
}
