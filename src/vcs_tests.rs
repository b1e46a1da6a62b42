//! Unit tests for the git publish flow.

#[cfg(test)]
mod vcs_tests {
    use crate::config::GitConfig;
    use crate::error::{Result, SyncError};
    use crate::vcs::{publish, GitCli, VersionControl};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingVcs {
        dirty: bool,
        fail_push: bool,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingVcs {
        fn new(dirty: bool) -> Self {
            Self {
                dirty,
                fail_push: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }
    }

    #[async_trait]
    impl VersionControl for RecordingVcs {
        async fn stage_all(&self) -> Result<()> {
            self.record("add");
            Ok(())
        }

        async fn is_dirty(&self) -> Result<bool> {
            self.record("status");
            Ok(self.dirty)
        }

        async fn commit(&self, message: &str) -> Result<()> {
            self.record(&format!("commit:{}", message));
            Ok(())
        }

        async fn push(&self) -> Result<()> {
            self.record("push");
            if self.fail_push {
                return Err(SyncError::Git {
                    command: "push".into(),
                    status: "exit status: 1".into(),
                    stderr: "rejected".into(),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_publish_dirty_tree_commits_and_pushes() {
        let vcs = RecordingVcs::new(true);
        let committed = publish(&vcs, "Updated data").await.unwrap();

        assert!(committed);
        assert_eq!(vcs.calls(), vec!["add", "status", "commit:Updated data", "push"]);
    }

    #[tokio::test]
    async fn test_publish_clean_tree_is_noop() {
        let vcs = RecordingVcs::new(false);
        let committed = publish(&vcs, "Updated data").await.unwrap();

        assert!(!committed);
        assert_eq!(vcs.calls(), vec!["add", "status"]);
    }

    #[tokio::test]
    async fn test_publish_propagates_push_failure() {
        let mut vcs = RecordingVcs::new(true);
        vcs.fail_push = true;

        let err = publish(&vcs, "msg").await.unwrap_err();
        assert!(matches!(err, SyncError::Git { .. }));
    }

    #[tokio::test]
    async fn test_git_cli_outside_repo_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = GitConfig {
            repo_dir: dir.path().join("missing"),
            ..GitConfig::default()
        };
        let git = GitCli::new(&config);

        // Nonexistent working directory: spawning fails before git runs
        assert!(git.stage_all().await.is_err());
    }
}
