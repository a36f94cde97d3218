//! Remote exchange rate source

use super::rates::RateSnapshot;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest rates for every currency the provider knows.
    async fn fetch_latest(&self, api_key: &str) -> Result<RateSnapshot>;
}
