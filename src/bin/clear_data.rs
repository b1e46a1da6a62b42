//! Maintenance entry point: truncates every CSV in the data directory.

use ohlcv_sync::data::store::CsvStore;
use ohlcv_sync::{logging, AppConfig};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let config = AppConfig::load()?;
    let store = CsvStore::new(config.data_dir(), config.output.csv_header);

    let cleared = store.clear_all()?;
    info!(count = cleared.len(), dir = %store.data_dir().display(), "Cleared CSV files");
    Ok(())
}
