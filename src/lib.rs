pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

pub use crate::cli::settings::SettingsCommand;
pub use crate::core::config;

use crate::core::config::AppConfig;
use crate::core::{Converter, RateStore};
use crate::providers::FreeCurrencyApiProvider;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Sync,
    Convert { amount: f64, from: String, to: String },
    Rates,
    Settings(SettingsCommand),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = store::open_store(&config)?;
    execute(command, &config, store).await
}

/// Runs a command against an already opened store.
pub async fn execute(
    command: AppCommand,
    config: &AppConfig,
    store: Arc<dyn RateStore>,
) -> Result<()> {
    match command {
        AppCommand::Sync => {
            let provider = FreeCurrencyApiProvider::new(&config.providers.freecurrencyapi)?;
            let converter = Converter::new(store, Arc::new(provider));
            cli::sync::run(&converter).await
        }
        AppCommand::Convert { amount, from, to } => {
            let provider = FreeCurrencyApiProvider::new(&config.providers.freecurrencyapi)?;
            let converter = Converter::new(store, Arc::new(provider));
            cli::convert::run(&converter, amount, &from, &to).await
        }
        AppCommand::Rates => cli::rates::run(store.as_ref()).await,
        AppCommand::Settings(command) => cli::settings::run(store.as_ref(), command).await,
    }
}
