//! Terminal front end: settings, the rate table and conversions

pub mod convert;
pub mod rates;
pub mod settings;
pub mod setup;
pub mod sync;
pub mod ui;
