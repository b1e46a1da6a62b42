//! Fan-out fetch orchestrator.
//!
//! One unit of work per selected symbol, all driven from the calling task
//! and joined before the manifest and git steps run. Units share nothing
//! mutable: each owns its own CSV file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use tracing::{debug, error, info, warn};

use crate::config::{AppConfig, ManifestScope};
use crate::data::manifest::Manifest;
use crate::data::normalizer::{normalize, NormalizeOptions};
use crate::data::store::CsvStore;
use crate::error::Result;
use crate::exchange::factory::build_exchange;
use crate::exchange::symbols::select_symbols;
use crate::exchange::traits::MarketDataApi;
use crate::vcs::{publish, GitCli, VersionControl};

use super::report::SyncReport;

/// Result of one symbol's fetch-normalize-write unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolOutcome {
    pub symbol: String,
    pub path: PathBuf,
    pub rows: usize,
    pub dropped: usize,
}

pub struct SyncService {
    config: AppConfig,
    exchange: Arc<dyn MarketDataApi>,
    vcs: Option<Arc<dyn VersionControl>>,
    store: CsvStore,
    options: NormalizeOptions,
}

impl SyncService {
    pub fn new(
        config: AppConfig,
        exchange: Arc<dyn MarketDataApi>,
        vcs: Option<Arc<dyn VersionControl>>,
    ) -> Self {
        let store = CsvStore::new(config.data_dir(), config.output.csv_header);
        let options = NormalizeOptions::from(&config.output);
        Self {
            config,
            exchange,
            vcs,
            store,
            options,
        }
    }

    pub fn store(&self) -> &CsvStore {
        &self.store
    }

    /// Loads the exchange universe and applies the selection policy.
    /// A failed universe load aborts the run.
    pub async fn select(&self) -> Result<Vec<String>> {
        let universe = self.exchange.load_symbols().await?;
        debug!(count = universe.len(), exchange = self.exchange.name(), "Loaded symbol universe");

        let selection = &self.config.selection;
        let candidates = if selection.symbols.is_empty() {
            &universe
        } else {
            &selection.symbols
        };

        let selected = select_symbols(candidates, &selection.quote_currency, selection.max_symbols);
        info!(
            count = selected.len(),
            quote = %selection.quote_currency,
            max = selection.max_symbols,
            "Selected symbols"
        );
        Ok(selected)
    }

    pub async fn sync_symbol(&self, symbol: &str) -> Result<SymbolOutcome> {
        let candles = self
            .exchange
            .fetch_ohlcv(symbol, &self.config.exchange.timeframe, self.config.exchange.candle_limit)
            .await?;

        let normalized = normalize(symbol, &candles, &self.options)?;
        if normalized.dropped > 0 {
            warn!(symbol = symbol, dropped = normalized.dropped, "Dropped rows with non-finite values");
        }

        let path = self.store.write_symbol(symbol, &normalized.rows)?;
        info!(symbol = symbol, rows = normalized.rows.len(), file = %path.display(), "Data saved");

        Ok(SymbolOutcome {
            symbol: symbol.to_string(),
            path,
            rows: normalized.rows.len(),
            dropped: normalized.dropped,
        })
    }

    /// Runs every symbol concurrently and waits for all of them. Failures
    /// are logged and recorded; they never cancel the other units.
    pub async fn sync_all(&self, report: &mut SyncReport) {
        let selected = report.selected.clone();
        let units = selected
            .iter()
            .map(|symbol| async move { (symbol.as_str(), self.sync_symbol(symbol).await) });
        let results = join_all(units).await;

        for (symbol, result) in results {
            match result {
                Ok(outcome) => report.record_success(symbol, outcome.rows, outcome.dropped),
                Err(e) => {
                    error!(symbol = symbol, error = %e, "Error fetching data");
                    report.record_failure(symbol, e);
                }
            }
        }
    }

    pub fn manifest_for(&self, report: &SyncReport) -> Manifest {
        let price_scale = self.config.output.price_scale;
        match self.config.output.manifest_scope {
            ManifestScope::Selected => Manifest::from_symbols(&report.selected, price_scale),
            ManifestScope::Succeeded => {
                let ok: HashSet<&str> = report.succeeded.iter().map(String::as_str).collect();
                let symbols: Vec<&str> = report
                    .selected
                    .iter()
                    .map(String::as_str)
                    .filter(|s| ok.contains(s))
                    .collect();
                Manifest::from_symbols(&symbols, price_scale)
            }
        }
    }

    pub async fn run(&self) -> Result<SyncReport> {
        let start = Instant::now();

        let selected = self.select().await?;
        let mut report = SyncReport::new(selected);

        self.sync_all(&mut report).await;

        if let Err(e) = self.exchange.close().await {
            warn!(error = %e, "Failed to release exchange client");
        }

        let manifest = self.manifest_for(&report);
        let manifest_path = self.config.manifest_path();
        manifest.write(&manifest_path)?;
        report.manifest_entries = manifest.len();
        info!(entries = manifest.len(), file = %manifest_path.display(), "Manifest written");

        if let Some(vcs) = &self.vcs {
            report.committed = publish(vcs.as_ref(), &self.config.git.commit_message).await?;
        } else {
            debug!("Git publishing disabled");
        }

        report.elapsed = start.elapsed();
        Ok(report)
    }
}

/// Builds the exchange client and git collaborator from `config` and
/// performs one full run.
pub async fn run_from_config(config: &AppConfig) -> Result<SyncReport> {
    let exchange = build_exchange(&config.exchange)?;
    let vcs: Option<Arc<dyn VersionControl>> = if config.git.enabled {
        Some(Arc::new(GitCli::new(&config.git)))
    } else {
        None
    };

    SyncService::new(config.clone(), exchange, vcs).run().await
}
