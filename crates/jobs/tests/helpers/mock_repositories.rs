#![allow(dead_code)]

use async_trait::async_trait;
use planeboard_application::ports::EntryRepository;
use planeboard_domain::{AccountFilter, DomainError, Entry};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockEntryRepository {
    entries: Arc<RwLock<BTreeMap<Vec<u8>, Entry>>>,
    prune_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            prune_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_entries(entries: Vec<Entry>) -> Self {
        let repo = Self::new();
        for entry in entries {
            let key = entry.sort_key().unwrap().encode();
            repo.entries.write().await.insert(key, entry);
        }
        repo
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn prune_calls(&self) -> u64 {
        self.prune_calls.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    async fn check_fail(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryRepository for MockEntryRepository {
    async fn insert(&self, entry: &Entry) -> Result<(), DomainError> {
        self.check_fail().await?;
        let key = entry.sort_key()?.encode();
        self.entries.write().await.insert(key, entry.clone());
        Ok(())
    }

    async fn find_before(
        &self,
        accounts: &AccountFilter,
        cutoff: i64,
        page: usize,
    ) -> Result<Option<Entry>, DomainError> {
        self.check_fail().await?;
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .rev()
            .filter(|e| e.created_at < cutoff && accounts.matches(&e.account))
            .nth(page)
            .cloned())
    }

    async fn prune_before(&self, cutoff: i64) -> Result<u64, DomainError> {
        self.prune_calls.fetch_add(1, Ordering::Relaxed);
        self.check_fail().await?;
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.created_at >= cutoff);
        Ok((before - entries.len()) as u64)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_fail().await?;
        Ok(self.entries.read().await.len() as u64)
    }
}

/// Entry created `age_secs` seconds ago.
pub fn make_aged_entry(id: i64, account: &str, age_secs: i64) -> Entry {
    let created_at = chrono::Utc::now().timestamp() - age_secs;
    Entry::new(id, account, created_at, format!("entry {}", id)).unwrap()
}
