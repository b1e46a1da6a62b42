use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{Result, SyncError};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    pub name: String,
    pub base_url: String,
    pub timeframe: String,
    /// Number of candles requested per symbol. `None` keeps the exchange default.
    pub candle_limit: Option<u32>,
    pub request_timeout_secs: u64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            name: "binance".to_string(),
            base_url: constants::exchange::DEFAULT_BASE_URL.to_string(),
            timeframe: constants::exchange::DEFAULT_TIMEFRAME.to_string(),
            candle_limit: None,
            request_timeout_secs: constants::exchange::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub quote_currency: String,
    pub max_symbols: usize,
    /// Fixed candidate list. When non-empty it replaces the exchange universe.
    pub symbols: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            quote_currency: constants::selection::DEFAULT_QUOTE_CURRENCY.to_string(),
            max_symbols: constants::selection::DEFAULT_MAX_SYMBOLS,
            symbols: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `20231114T`
    Date,
    /// `20231114T221320`
    #[default]
    DateTime,
}

impl TimestampFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::Date => "%Y%m%dT",
            TimestampFormat::DateTime => "%Y%m%dT%H%M%S",
        }
    }
}

/// Which symbols end up in the manifest after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestScope {
    /// Every selected symbol, even ones whose fetch failed this run.
    #[default]
    Selected,
    /// Only symbols whose CSV was written this run.
    Succeeded,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub data_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub decimal_places: usize,
    pub timestamp_format: TimestampFormat,
    pub csv_header: bool,
    pub price_scale: u32,
    pub manifest_scope: ManifestScope,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(constants::output::DEFAULT_DATA_DIR),
            manifest_path: PathBuf::from(constants::output::DEFAULT_MANIFEST_PATH),
            decimal_places: constants::output::DEFAULT_DECIMAL_PLACES,
            timestamp_format: TimestampFormat::default(),
            csv_header: true,
            price_scale: constants::output::DEFAULT_PRICE_SCALE,
            manifest_scope: ManifestScope::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub enabled: bool,
    pub repo_dir: PathBuf,
    pub remote: String,
    /// Pushes the current branch's upstream when unset.
    pub branch: Option<String>,
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            repo_dir: PathBuf::from("."),
            remote: constants::git::DEFAULT_REMOTE.to_string(),
            branch: None,
            commit_message: constants::git::DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub exchange: ExchangeConfig,
    pub selection: SelectionConfig,
    pub output: OutputConfig,
    pub git: GitConfig,
    /// Six-field cron expression. Runs once and exits when unset.
    pub schedule: Option<String>,
}

impl AppConfig {
    /// Loads from `$OHLCV_SYNC_CONFIG`, falling back to `config.yaml`.
    /// A missing default file yields the built-in defaults.
    pub fn load() -> Result<Self> {
        match std::env::var(constants::config::CONFIG_PATH_ENV) {
            Ok(path) => Self::from_path(path),
            Err(_) => {
                let path = Path::new(constants::config::DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_path(path)
                } else {
                    let config = Self::default();
                    config.validate()?;
                    Ok(config)
                }
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let config: AppConfig = if content.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.selection.max_symbols == 0 {
            return Err(SyncError::Config("selection.max_symbols must be > 0".into()));
        }
        if self.selection.quote_currency.trim().is_empty() {
            return Err(SyncError::Config("selection.quote_currency is empty".into()));
        }
        if self.output.decimal_places > constants::output::MAX_DECIMAL_PLACES {
            return Err(SyncError::Config(format!(
                "output.decimal_places must be <= {} (got {})",
                constants::output::MAX_DECIMAL_PLACES,
                self.output.decimal_places
            )));
        }
        url::Url::parse(&self.exchange.base_url).map_err(|e| {
            SyncError::Config(format!("exchange.base_url '{}': {}", self.exchange.base_url, e))
        })?;
        if let Some(schedule) = &self.schedule {
            if schedule.trim().is_empty() {
                return Err(SyncError::Config("schedule is set but empty".into()));
            }
        }
        Ok(())
    }

    /// CSV directory, resolved against the repository root when relative.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve(&self.output.data_dir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.resolve(&self.output.manifest_path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.git.repo_dir.join(path)
        }
    }
}
