//! Application-wide constants and defaults
//!
//! Centralizes the values the pipeline falls back to when `config.yaml`
//! leaves a field out.

/// Exchange defaults
pub mod exchange {
    /// Public Binance spot REST endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

    /// Daily candles
    pub const DEFAULT_TIMEFRAME: &str = "1d";

    /// Per-request timeout applied to the shared HTTP client
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Binance only lists pairs with this status as tradable
    pub const TRADING_STATUS: &str = "TRADING";
}

/// Symbol selection defaults
pub mod selection {
    pub const DEFAULT_QUOTE_CURRENCY: &str = "USDT";

    pub const DEFAULT_MAX_SYMBOLS: usize = 50;

    /// Separator between base and quote in an instrument identifier
    pub const SEPARATOR: char = '/';

    /// Characters that mark a derivative or dated contract
    pub const CONTRACT_DELIMITERS: [char; 4] = [':', '-', '.', '_'];
}

/// Output defaults
pub mod output {
    pub const DEFAULT_DATA_DIR: &str = "data";

    pub const DEFAULT_MANIFEST_PATH: &str = "symbol_info/seed_ohlcv_data.json";

    pub const DEFAULT_DECIMAL_PLACES: usize = 9;

    /// Upper bound accepted by config validation
    pub const MAX_DECIMAL_PLACES: usize = 18;

    pub const DEFAULT_PRICE_SCALE: u32 = 10;

    pub const CSV_EXTENSION: &str = "csv";

    /// Written in place of an infinite value before the row is dropped
    pub const MISSING_SENTINEL: &str = "";

    pub const CSV_HEADER: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];
}

/// Git defaults
pub mod git {
    pub const DEFAULT_REMOTE: &str = "origin";

    pub const DEFAULT_COMMIT_MESSAGE: &str = "Updated data";
}

/// Config file discovery
pub mod config {
    pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

    /// Env var overriding the config file location
    pub const CONFIG_PATH_ENV: &str = "OHLCV_SYNC_CONFIG";
}
