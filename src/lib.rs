//! ohlcv_sync - Daily OHLCV snapshots published to a git repository
//!
//! Selects spot pairs from an exchange, fetches their candles, writes one
//! normalized CSV per pair plus a JSON symbol manifest, then commits and
//! pushes the result.

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod services;
pub mod vcs;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Result, SyncError};
pub use exchange::types::Candle;
pub use services::report::SyncReport;
pub use services::sync::{run_from_config, SyncService};

#[cfg(test)]
mod vcs_tests;
