pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use crate::core::store::RateStore;
use anyhow::Result;
use disk::FjallRateStore;
use std::sync::Arc;
use tracing::debug;

/// Opens the persistent settings store under the configured data directory.
pub fn open_store(config: &AppConfig) -> Result<Arc<dyn RateStore>> {
    let path = config.default_data_path()?.join("settings");
    debug!("Opening settings store at {}", path.display());

    let store = FjallRateStore::open(&path)?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::RateSnapshot;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_store_uses_data_path() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            data_path: Some(dir.path().to_string_lossy().into_owned()),
            ..AppConfig::default()
        };

        {
            let store = open_store(&config).unwrap();
            let snapshot: RateSnapshot = [("USD".to_string(), 1.0)].into_iter().collect();
            store.set_rates(snapshot).await.unwrap();
        }

        assert!(dir.path().join("settings").exists());
    }
}
