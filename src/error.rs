//! Custom error types for the sync pipeline
//!
//! Per-symbol failures are caught by the orchestrator; everything else
//! propagates up to the binary as a `SyncError`.

use thiserror::Error;

/// Top-level sync errors
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("git {command} failed ({status}): {stderr}")]
    Git {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scheduler error: {0}")]
    Schedule(String),
}

/// Exchange-specific errors
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid symbol: {symbol}")]
    InvalidSymbol { symbol: String },

    #[error("Unsupported exchange '{name}' (expected binance)")]
    UnsupportedExchange { name: String },

    #[error("Malformed candle for {symbol}: {reason}")]
    MalformedCandle { symbol: String, reason: String },

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Candle normalization errors
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Timestamp {timestamp} out of range for {symbol}")]
    TimestampOutOfRange { symbol: String, timestamp: i64 },
}

impl From<serde_yaml::Error> for SyncError {
    fn from(err: serde_yaml::Error) -> Self {
        SyncError::Config(err.to_string())
    }
}

impl From<tokio_cron_scheduler::JobSchedulerError> for SyncError {
    fn from(err: tokio_cron_scheduler::JobSchedulerError) -> Self {
        SyncError::Schedule(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
