//! Binance Spot adapter (public REST only).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{
    symbols::{split_symbol, to_binance_symbol},
    traits::{ExchangeResult, MarketDataApi},
    types::{Candle, Instrument},
};

use crate::config::ExchangeConfig;
use crate::constants::exchange::TRADING_STATUS;
use crate::error::ExchangeError;

#[derive(Debug, Deserialize)]
struct ExchangeInfo {
    symbols: Vec<BinanceSymbol>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BinanceSymbol {
    base_asset: String,
    quote_asset: String,
    status: String,
}

/// Kline array as returned by `/api/v3/klines`. Only the first six
/// columns are used.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct BinanceKline(
    i64,    // 0: Open time
    String, // 1: Open
    String, // 2: High
    String, // 3: Low
    String, // 4: Close
    String, // 5: Volume
    Value,  // 6: Close time
    Value,  // 7: Quote asset volume
    Value,  // 8: Number of trades
    Value,  // 9: Taker buy base asset volume
    Value,  // 10: Taker buy quote asset volume
    Value,  // 11: Ignore
);

#[derive(Clone)]
pub struct BinanceExchange {
    client: Client,
    base_url: String,
}

impl BinanceExchange {
    pub fn new(config: &ExchangeConfig) -> ExchangeResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn public_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ExchangeResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Binance GET");

        let resp = self.client.get(&url).query(query).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ExchangeError::Http { status: status.as_u16(), body: text });
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn parse_field(symbol: &str, name: &str, raw: &str) -> ExchangeResult<f64> {
        raw.parse::<f64>().map_err(|e| ExchangeError::MalformedCandle {
            symbol: symbol.to_string(),
            reason: format!("{} '{}': {}", name, raw, e),
        })
    }

    fn to_candle(symbol: &str, k: BinanceKline) -> ExchangeResult<Candle> {
        Ok(Candle {
            timestamp: k.0,
            open: Self::parse_field(symbol, "open", &k.1)?,
            high: Self::parse_field(symbol, "high", &k.2)?,
            low: Self::parse_field(symbol, "low", &k.3)?,
            close: Self::parse_field(symbol, "close", &k.4)?,
            volume: Self::parse_field(symbol, "volume", &k.5)?,
        })
    }
}

#[async_trait]
impl MarketDataApi for BinanceExchange {
    fn name(&self) -> &'static str {
        "binance"
    }

    async fn load_symbols(&self) -> ExchangeResult<Vec<String>> {
        let info: ExchangeInfo = self.public_get("/api/v3/exchangeInfo", &[]).await?;
        Ok(info
            .symbols
            .into_iter()
            .filter(|s| s.status == TRADING_STATUS)
            .map(|s| Instrument::new(&s.base_asset, &s.quote_asset).symbol)
            .collect())
    }

    async fn fetch_ohlcv(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: Option<u32>,
    ) -> ExchangeResult<Vec<Candle>> {
        if split_symbol(symbol).is_none() {
            return Err(ExchangeError::InvalidSymbol { symbol: symbol.to_string() });
        }

        let mut query = vec![
            ("symbol", to_binance_symbol(symbol)),
            ("interval", timeframe.to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let klines: Vec<BinanceKline> = self.public_get("/api/v3/klines", &query).await?;
        klines
            .into_iter()
            .map(|k| Self::to_candle(symbol, k))
            .collect()
    }

    async fn close(&self) -> ExchangeResult<()> {
        debug!("Binance client released");
        Ok(())
    }
}
