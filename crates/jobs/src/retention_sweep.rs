use planeboard_application::use_cases::PruneEntriesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 900;

/// Periodically drops entries older than the retention window.
pub struct RetentionSweepJob {
    prune: Arc<PruneEntriesUseCase>,
    retention_secs: u64,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RetentionSweepJob {
    pub fn new(prune: Arc<PruneEntriesUseCase>, retention_secs: u64) -> Self {
        Self {
            prune,
            retention_secs,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawn the sweep loop. The first sweep runs immediately.
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            retention_secs = self.retention_secs,
            interval_secs = self.interval_secs,
            "Starting retention sweep job"
        );

        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RetentionSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.sweep().await;
                    }
                }
            }
        })
    }

    async fn sweep(&self) {
        match self.prune.execute(self.retention_secs).await {
            Ok(deleted) => {
                info!(deleted, "Retention sweep completed");
            }
            Err(e) => {
                error!(error = %e, "Retention sweep failed");
            }
        }
    }
}
