//! Turns raw exchange candles into the canonical CSV row form.
//!
//! Rows come out in `timestamp, open, high, low, close, volume` order with
//! fixed-width timestamps and fixed-decimal numbers. Non-finite values
//! never reach the output: they are swapped for the missing sentinel and
//! the whole row is dropped.

use chrono::DateTime;
use serde::Serialize;

use crate::config::{OutputConfig, TimestampFormat};
use crate::constants::output::{CSV_HEADER, MISSING_SENTINEL};
use crate::error::NormalizeError;
use crate::exchange::types::Candle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub decimal_places: usize,
    pub timestamp_format: TimestampFormat,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for NormalizeOptions {
    fn from(output: &OutputConfig) -> Self {
        Self {
            decimal_places: output.decimal_places,
            timestamp_format: output.timestamp_format,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NormalizedRow {
    pub timestamp: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

impl NormalizedRow {
    pub fn fields(&self) -> [&str; 6] {
        [
            self.timestamp.as_str(),
            self.open.as_str(),
            self.high.as_str(),
            self.low.as_str(),
            self.close.as_str(),
            self.volume.as_str(),
        ]
    }

    fn has_missing(&self) -> bool {
        self.fields()[1..].iter().any(|f| *f == MISSING_SENTINEL)
    }
}

/// Output of one normalization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Normalized {
    pub rows: Vec<NormalizedRow>,
    /// Rows removed because a field was non-finite
    pub dropped: usize,
}

pub fn format_timestamp(
    symbol: &str,
    timestamp_ms: i64,
    format: TimestampFormat,
) -> Result<String, NormalizeError> {
    let dt = DateTime::from_timestamp_millis(timestamp_ms).ok_or_else(|| {
        NormalizeError::TimestampOutOfRange {
            symbol: symbol.to_string(),
            timestamp: timestamp_ms,
        }
    })?;
    Ok(dt.format(format.pattern()).to_string())
}

/// Fixed-decimal rendering; non-finite input maps to the missing sentinel.
pub fn format_value(value: f64, decimal_places: usize) -> String {
    if !value.is_finite() {
        return MISSING_SENTINEL.to_string();
    }
    format!("{:.*}", decimal_places, value)
}

pub fn normalize(
    symbol: &str,
    candles: &[Candle],
    options: &NormalizeOptions,
) -> Result<Normalized, NormalizeError> {
    let places = options.decimal_places;

    let mut rows = Vec::with_capacity(candles.len());
    for candle in candles {
        rows.push(NormalizedRow {
            timestamp: format_timestamp(symbol, candle.timestamp, options.timestamp_format)?,
            open: format_value(candle.open, places),
            high: format_value(candle.high, places),
            low: format_value(candle.low, places),
            close: format_value(candle.close, places),
            volume: format_value(candle.volume, places),
        });
    }

    let before = rows.len();
    rows.retain(|row| !row.has_missing());
    let dropped = before - rows.len();

    // Fixed-width timestamps sort chronologically as strings
    rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    Ok(Normalized { rows, dropped })
}

/// Renders rows as CSV, optionally preceded by the column header.
pub fn to_csv(rows: &[NormalizedRow], header: bool) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if header {
        writer.write_record(CSV_HEADER)?;
    }
    for row in rows {
        writer.write_record(row.fields())?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
