//! Persistent settings behind the converter

use super::rates::RateSnapshot;
use super::settings::AllowedCurrencies;
use anyhow::Result;
use async_trait::async_trait;

/// Name of the settings object holding the credential, rates and allowed
/// currencies.
pub const SETTINGS_NAME: &str = "currency_converter.settings";

pub const API_KEY: &str = "api_key";
pub const CURRENCIES: &str = "currencies";
pub const ALLOWED_VALUES: &str = "allowed_values";

/// Key-value store that owns the API credential and the cached rates.
///
/// Errors are failures of the backing storage and are fatal to the caller.
/// `set_rates` must replace the snapshot in a single write.
#[async_trait]
pub trait RateStore: Send + Sync {
    async fn credential(&self) -> Result<Option<String>>;

    async fn set_credential(&self, api_key: String) -> Result<()>;

    async fn rates(&self) -> Result<Option<RateSnapshot>>;

    async fn set_rates(&self, snapshot: RateSnapshot) -> Result<()>;

    async fn allowed_currencies(&self) -> Result<AllowedCurrencies>;

    async fn set_allowed_currencies(&self, allowed: AllowedCurrencies) -> Result<()>;
}
