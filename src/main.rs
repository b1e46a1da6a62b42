use ohlcv_sync::services::scheduler::SyncScheduler;
use ohlcv_sync::{logging, run_from_config, AppConfig, SyncError};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    logging::init()?;

    info!("Starting OHLCV sync...");

    let config = AppConfig::load()?;
    info!("Loaded Configuration: {:?}", config);

    if config.schedule.is_some() {
        let scheduler = SyncScheduler::new(config)?;
        info!("📅 Running on schedule: {}", scheduler.schedule());
        let mut handle = scheduler.start().await?;

        tokio::signal::ctrl_c().await?;
        info!("Shutdown signal received, stopping scheduler...");
        handle.shutdown().await.map_err(SyncError::from)?;
    } else {
        let report = run_from_config(&config).await?;
        report.log_summary();
    }

    Ok(())
}
