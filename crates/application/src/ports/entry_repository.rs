use async_trait::async_trait;
use planeboard_domain::{AccountFilter, DomainError, Entry};

/// Time-ordered entry store.
///
/// Every lookup scans the whole store in key order; there is no secondary
/// index. Implementations must run each scan against one consistent snapshot
/// and serialize writers.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Insert or overwrite the entry stored under the same sort key.
    async fn insert(&self, entry: &Entry) -> Result<(), DomainError>;

    /// Return the `page`-th most recent entry (0 = newest) with
    /// `created_at < cutoff` whose account passes `accounts`.
    async fn find_before(
        &self,
        accounts: &AccountFilter,
        cutoff: i64,
        page: usize,
    ) -> Result<Option<Entry>, DomainError>;

    /// Delete every entry with `created_at < cutoff`; returns how many were removed.
    async fn prune_before(&self, cutoff: i64) -> Result<u64, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
