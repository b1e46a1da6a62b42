use std::sync::Arc;

use crate::{config::ExchangeConfig, error::ExchangeError};

use super::{binance::BinanceExchange, traits::MarketDataApi};

pub fn build_exchange(config: &ExchangeConfig) -> Result<Arc<dyn MarketDataApi>, ExchangeError> {
    match config.name.to_lowercase().as_str() {
        "binance" => {
            let ex = BinanceExchange::new(config)?;
            Ok(Arc::new(ex))
        }
        other => Err(ExchangeError::UnsupportedExchange { name: other.to_string() }),
    }
}
