//! Symbol selection and normalization helpers.
//!
//! Canonical symbol (used internally): "BASE/QUOTE" like "BTC/USDT".
//!
//! Exchange mappings:
//! - Binance REST: "BTCUSDT"
//! - CSV file stem: "BTCUSDT"

use std::collections::HashSet;

use crate::constants::selection::{CONTRACT_DELIMITERS, SEPARATOR};

/// Splits a canonical symbol into (base, quote). Returns `None` unless
/// there is exactly one separator with non-empty sides.
pub fn split_symbol(symbol: &str) -> Option<(&str, &str)> {
    let (base, quote) = symbol.split_once(SEPARATOR)?;
    if base.is_empty() || quote.is_empty() || quote.contains(SEPARATOR) {
        return None;
    }
    Some((base, quote))
}

/// True for plain spot pairs quoted in `quote_currency`.
pub fn is_spot_pair(symbol: &str, quote_currency: &str) -> bool {
    if symbol
        .chars()
        .any(|c| c.is_whitespace() || CONTRACT_DELIMITERS.contains(&c))
    {
        return false;
    }
    match split_symbol(symbol) {
        Some((_, quote)) => quote == quote_currency,
        None => false,
    }
}

/// Picks up to `max` spot pairs quoted in `quote_currency`, keeping the
/// order of `universe`. Repeated identifiers are emitted once.
pub fn select_symbols<S: AsRef<str>>(universe: &[S], quote_currency: &str, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    universe
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| is_spot_pair(s, quote_currency))
        .filter(|s| seen.insert(*s))
        .take(max)
        .map(str::to_string)
        .collect()
}

pub fn to_binance_symbol(canonical: &str) -> String {
    canonical.replace(SEPARATOR, "").to_uppercase()
}

/// File stem for a symbol's CSV: the separator stripped, e.g. "BTCUSDT".
pub fn csv_file_stem(canonical: &str) -> String {
    canonical.replace(SEPARATOR, "")
}
