//! Core business logic: rates, persistence contracts and the converter service

pub mod config;
pub mod converter;
pub mod log;
pub mod provider;
pub mod rates;
pub mod settings;
pub mod store;

// Re-export main types for cleaner imports
pub use converter::{Converter, SyncOutcome};
pub use provider::RateProvider;
pub use rates::RateSnapshot;
pub use settings::AllowedCurrencies;
pub use store::RateStore;
