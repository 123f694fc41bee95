use crate::ports::EntryRepository;
use planeboard_domain::DomainError;
use std::sync::Arc;
use tracing::info;

pub struct PruneEntriesUseCase {
    entry_repo: Arc<dyn EntryRepository>,
}

impl PruneEntriesUseCase {
    pub fn new(entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self { entry_repo }
    }

    /// Prune everything older than `retention_secs` before now.
    pub async fn execute(&self, retention_secs: u64) -> Result<u64, DomainError> {
        let cutoff = chrono::Utc::now()
            .timestamp()
            .saturating_sub(i64::try_from(retention_secs).unwrap_or(i64::MAX));
        self.execute_before(cutoff).await
    }

    pub async fn execute_before(&self, cutoff: i64) -> Result<u64, DomainError> {
        let deleted = self.entry_repo.prune_before(cutoff).await?;
        info!(deleted, cutoff, "Old entries pruned");
        Ok(deleted)
    }
}
