use crate::core::rates::RateSnapshot;
use crate::core::settings::AllowedCurrencies;
use crate::core::store::{ALLOWED_VALUES, API_KEY, CURRENCIES, RateStore, SETTINGS_NAME};
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Settings store kept in a fjall partition.
///
/// Each setting lives under its own key as JSON. Writes are a single insert
/// followed by a journal sync, so a reader never sees half a snapshot.
pub struct FjallRateStore {
    keyspace: Arc<Keyspace>,
    partition: PartitionHandle,
}

impl FjallRateStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create store directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open settings store at {}", path.display()))?;
        Self::with_keyspace(Arc::new(keyspace))
    }

    pub fn with_keyspace(keyspace: Arc<Keyspace>) -> Result<Self> {
        // Partition names cannot contain dots
        let partition_name = SETTINGS_NAME.replace('.', "_");
        let partition = keyspace
            .open_partition(&partition_name, PartitionCreateOptions::default())
            .with_context(|| format!("Failed to open partition {partition_name}"))?;

        Ok(Self {
            keyspace,
            partition,
        })
    }

    fn read<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>> {
        let Some(bytes) = self
            .partition
            .get(key)
            .with_context(|| format!("Failed to read {key}"))?
        else {
            debug!("Store MISS for key: {}", key);
            return Ok(None);
        };

        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to decode stored {key}"))?;
        debug!("Store HIT for key: {}", key);
        Ok(Some(value))
    }

    fn write<V: Serialize>(&self, key: &str, value: &V) -> Result<()> {
        let bytes = serde_json::to_vec(value).with_context(|| format!("Failed to encode {key}"))?;
        self.partition
            .insert(key, bytes)
            .with_context(|| format!("Failed to write {key}"))?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .with_context(|| format!("Failed to persist {key}"))?;
        debug!("Store PUT for key: {}", key);
        Ok(())
    }
}

#[async_trait]
impl RateStore for FjallRateStore {
    async fn credential(&self) -> Result<Option<String>> {
        self.read(API_KEY)
    }

    async fn set_credential(&self, api_key: String) -> Result<()> {
        self.write(API_KEY, &api_key)
    }

    async fn rates(&self) -> Result<Option<RateSnapshot>> {
        self.read(CURRENCIES)
    }

    async fn set_rates(&self, snapshot: RateSnapshot) -> Result<()> {
        self.write(CURRENCIES, &snapshot)
    }

    async fn allowed_currencies(&self) -> Result<AllowedCurrencies> {
        Ok(self.read(ALLOWED_VALUES)?.unwrap_or_default())
    }

    async fn set_allowed_currencies(&self, allowed: AllowedCurrencies) -> Result<()> {
        self.write(ALLOWED_VALUES, &allowed)
    }
}
