#![allow(dead_code)]

use async_trait::async_trait;
use planeboard_application::ports::EntryRepository;
use planeboard_domain::{AccountFilter, DomainError, Entry};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store keyed by the encoded sort key, scanned the same way the
/// SQLite repository scans.
pub struct MockEntryRepository {
    entries: Arc<RwLock<BTreeMap<Vec<u8>, Entry>>>,
    find_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            find_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_entries(entries: Vec<Entry>) -> Self {
        let repo = Self::new();
        for entry in entries {
            repo.add(entry).await;
        }
        repo
    }

    pub async fn add(&self, entry: Entry) {
        let key = entry.sort_key().unwrap().encode();
        self.entries.write().await.insert(key, entry);
    }

    pub async fn all(&self) -> Vec<Entry> {
        self.entries.read().await.values().cloned().collect()
    }

    pub fn find_calls(&self) -> u64 {
        self.find_calls.load(Ordering::Relaxed)
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
        self.find_calls.fetch_add(1, Ordering::Relaxed);
        self.check_fail().await?;
        let entries = self.entries.read().await;
        let matching: Vec<&Entry> = entries
            .values()
            .filter(|e| e.created_at < cutoff && accounts.matches(&e.account))
            .collect();
        if page >= matching.len() {
            return Ok(None);
        }
        Ok(Some(matching[matching.len() - 1 - page].clone()))
    }

    async fn prune_before(&self, cutoff: i64) -> Result<u64, DomainError> {
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

pub fn make_entry(id: i64, account: &str, created_at: i64) -> Entry {
    Entry::new(id, account, created_at, format!("{} says #{}", account, id)).unwrap()
}
