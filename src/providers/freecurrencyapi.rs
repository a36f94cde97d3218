use super::util::with_retry;
use crate::core::config::FreeCurrencyApiConfig;
use crate::core::provider::RateProvider;
use crate::core::rates::RateSnapshot;
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, error, instrument};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "apikey";

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    data: BTreeMap<String, f64>,
}

/// Latest rates from freecurrencyapi.com, quoted against USD.
pub struct FreeCurrencyApiProvider {
    base_url: String,
    client: reqwest::Client,
    retries: usize,
    retry_delay_ms: u64,
}

impl FreeCurrencyApiProvider {
    pub fn new(config: &FreeCurrencyApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("currency-converter/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(FreeCurrencyApiProvider {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            retries: config.retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }
}

#[async_trait]
impl RateProvider for FreeCurrencyApiProvider {
    #[instrument(name = "FreeCurrencyApiFetch", skip(self, api_key))]
    async fn fetch_latest(&self, api_key: &str) -> Result<RateSnapshot> {
        let url = format!("{}/v1/latest", self.base_url);
        debug!("Requesting latest rates from {}", url);

        let client = &self.client;
        let request_url = url.as_str();
        let response = with_retry(
            move || async move {
                client
                    .get(request_url)
                    .header(API_KEY_HEADER, api_key)
                    .send()
                    .await?
                    .error_for_status()
            },
            self.retries,
            self.retry_delay_ms,
        )
        .await
        .context("Rate request failed")?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!("Unexpected HTTP status: {}", response.status()));
        }

        let text = response
            .text()
            .await
            .context("Failed to get response text")?;

        let data: LatestRatesResponse = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                error!(error = ?e, response = %text, "Failed to parse rates response");
                return Err(anyhow!("Failed to parse rates response: {}", e));
            }
        };

        if data.data.is_empty() {
            bail!("No rates found in response");
        }

        debug!(currencies = data.data.len(), "Received latest rates");
        Ok(RateSnapshot::new(data.data).with_fetched_at(Utc::now()))
    }
}
