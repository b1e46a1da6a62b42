//! Per-run outcome summary.

use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedSymbol {
    pub symbol: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Symbols picked by the selector, in selection order
    pub selected: Vec<String>,
    /// Symbols whose CSV was rewritten this run, in selection order
    pub succeeded: Vec<String>,
    pub failed: Vec<FailedSymbol>,
    pub rows_written: usize,
    /// Rows removed for holding a non-finite value
    pub rows_dropped: usize,
    pub manifest_entries: usize,
    pub committed: bool,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SyncReport {
    pub fn new(selected: Vec<String>) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self, symbol: &str, rows: usize, dropped: usize) {
        self.succeeded.push(symbol.to_string());
        self.rows_written += rows;
        self.rows_dropped += dropped;
    }

    pub fn record_failure(&mut self, symbol: &str, error: impl ToString) {
        self.failed.push(FailedSymbol {
            symbol: symbol.to_string(),
            error: error.to_string(),
        });
    }

    /// Percentage of selected symbols written successfully.
    pub fn success_rate(&self) -> f64 {
        if self.selected.is_empty() {
            0.0
        } else {
            (self.succeeded.len() as f64 / self.selected.len() as f64) * 100.0
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            selected = self.selected.len(),
            succeeded = self.succeeded.len(),
            failed = self.failed.len(),
            rows_written = self.rows_written,
            rows_dropped = self.rows_dropped,
            manifest_entries = self.manifest_entries,
            committed = self.committed,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "Sync run complete"
        );
    }
}
