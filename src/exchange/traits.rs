use async_trait::async_trait;

use crate::error::ExchangeError;

use super::types::Candle;

pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Read-only market data surface the sync pipeline consumes.
#[async_trait]
pub trait MarketDataApi: Send + Sync {
    fn name(&self) -> &'static str;

    /// Loads the tradable symbol universe in exchange order.
    async fn load_symbols(&self) -> ExchangeResult<Vec<String>>;

    async fn fetch_ohlcv(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: Option<u32>,
    ) -> ExchangeResult<Vec<Candle>>;

    /// Releases the connection once all fetches have settled.
    async fn close(&self) -> ExchangeResult<()> {
        Ok(())
    }
}
