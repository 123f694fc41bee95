use crate::ports::EntryRepository;
use planeboard_domain::{DomainError, IncomingMessage};
use std::sync::Arc;
use tracing::debug;

pub struct IngestEntryUseCase {
    entry_repo: Arc<dyn EntryRepository>,
}

impl IngestEntryUseCase {
    pub fn new(entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self { entry_repo }
    }

    pub async fn execute(&self, message: IncomingMessage) -> Result<(), DomainError> {
        let entry = message.into_entry()?;
        self.entry_repo.insert(&entry).await?;
        debug!(
            id = entry.id,
            account = %entry.account,
            created_at = entry.created_at,
            "Entry stored"
        );
        Ok(())
    }
}
