//! Cron-driven repeat of the sync run.
//! Each tick performs a full run with a fresh exchange client.

use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::{Result, SyncError};

use super::sync::run_from_config;

pub struct SyncScheduler {
    schedule: String,
    config: AppConfig,
}

impl SyncScheduler {
    pub fn new(config: AppConfig) -> Result<Self> {
        let schedule = config
            .schedule
            .clone()
            .ok_or_else(|| SyncError::Config("schedule is not set".to_string()))?;
        Ok(Self { schedule, config })
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// Registers the sync job and starts the scheduler. The caller keeps the
    /// returned handle alive and shuts it down.
    pub async fn start(&self) -> Result<JobScheduler> {
        let scheduler = JobScheduler::new().await?;

        let config = self.config.clone();
        let job = Job::new_async(self.schedule.as_str(), move |_uuid, _l| {
            let config = config.clone();

            Box::pin(async move {
                info!("Scheduled sync run starting");
                match run_from_config(&config).await {
                    Ok(report) => report.log_summary(),
                    Err(e) => error!(error = %e, "Scheduled sync run failed"),
                }
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        info!(schedule = %self.schedule, "Sync scheduler started");
        Ok(scheduler)
    }
}
