//! Git collaborator: stage everything, and commit + push only when the
//! working tree changed.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::GitConfig;
use crate::error::{Result, SyncError};

#[async_trait]
pub trait VersionControl: Send + Sync {
    async fn stage_all(&self) -> Result<()>;
    async fn is_dirty(&self) -> Result<bool>;
    async fn commit(&self, message: &str) -> Result<()>;
    async fn push(&self) -> Result<()>;
}

/// Stages all changes; commits and pushes only if something is staged.
/// Returns whether a commit was made.
pub async fn publish(vcs: &dyn VersionControl, message: &str) -> Result<bool> {
    vcs.stage_all().await?;
    if !vcs.is_dirty().await? {
        info!("Working tree clean, nothing to commit");
        return Ok(false);
    }
    vcs.commit(message).await?;
    vcs.push().await?;
    info!(message = message, "Committed and pushed changes");
    Ok(true)
}

/// Shells out to the `git` binary in `repo_dir`.
#[derive(Clone, Debug)]
pub struct GitCli {
    repo_dir: PathBuf,
    remote: String,
    branch: Option<String>,
}

impl GitCli {
    pub fn new(config: &GitConfig) -> Self {
        Self {
            repo_dir: config.repo_dir.clone(),
            remote: config.remote.clone(),
            branch: config.branch.clone(),
        }
    }

    async fn git(&self, args: &[&str]) -> Result<String> {
        debug!(args = ?args, repo = %self.repo_dir.display(), "git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .await?;

        if !output.status.success() {
            return Err(SyncError::Git {
                command: args.join(" "),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn stage_all(&self) -> Result<()> {
        self.git(&["add", "-A"]).await.map(|_| ())
    }

    async fn is_dirty(&self) -> Result<bool> {
        let status = self.git(&["status", "--porcelain"]).await?;
        Ok(!status.trim().is_empty())
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.git(&["commit", "-m", message]).await.map(|_| ())
    }

    async fn push(&self) -> Result<()> {
        let mut args = vec!["push", self.remote.as_str()];
        if let Some(branch) = &self.branch {
            args.push(branch.as_str());
        }
        self.git(&args).await.map(|_| ())
    }
}
