use async_trait::async_trait;
use futures::TryStreamExt;
use planeboard_application::ports::EntryRepository;
use planeboard_domain::{AccountFilter, DomainError, Entry, EntryPayload, SortKey};
use sqlx::SqlitePool;
use std::collections::VecDeque;
use tracing::{debug, error, instrument, warn};

const SCAN_KEYS: &str = "SELECT sort_key FROM entries ORDER BY sort_key";

/// Entry store over a single `entries(sort_key, payload)` table.
///
/// Finds and prunes walk every key in order and filter in Rust; there is no
/// secondary index.
pub struct SqliteEntryRepository {
    write_pool: SqlitePool,
    read_pool: SqlitePool,
}

impl SqliteEntryRepository {
    pub fn new(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            write_pool,
            read_pool,
        }
    }

    fn decode_key(raw: &[u8]) -> Option<SortKey> {
        match SortKey::decode(raw) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(error = %e, key_len = raw.len(), "Skipping undecodable key");
                None
            }
        }
    }
}

fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, "{}", context);
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl EntryRepository for SqliteEntryRepository {
    #[instrument(skip(self, entry), fields(id = entry.id, account = %entry.account))]
    async fn insert(&self, entry: &Entry) -> Result<(), DomainError> {
        let key = entry.sort_key()?.encode();
        let payload = entry.payload.to_bytes()?;

        sqlx::query("INSERT OR REPLACE INTO entries (sort_key, payload) VALUES (?, ?)")
            .bind(key)
            .bind(payload)
            .execute(&self.write_pool)
            .await
            .map_err(db_error("Failed to insert entry"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_before(
        &self,
        accounts: &AccountFilter,
        cutoff: i64,
        page: usize,
    ) -> Result<Option<Entry>, DomainError> {
        if accounts.is_empty() {
            return Ok(None);
        }

        let mut tx = self
            .read_pool
            .begin()
            .await
            .map_err(db_error("Failed to begin read transaction"))?;

        // Only the newest `page + 1` matches are needed; older ones fall off the front.
        let wanted = page.saturating_add(1);
        let mut window: VecDeque<(Vec<u8>, SortKey)> = VecDeque::with_capacity(wanted.min(64));
        let mut scanned = 0u64;
        {
            let mut rows = sqlx::query_as::<_, (Vec<u8>,)>(SCAN_KEYS).fetch(&mut *tx);
            while let Some((raw,)) = rows
                .try_next()
                .await
                .map_err(db_error("Failed to scan entries"))?
            {
                scanned += 1;
                let Some(key) = Self::decode_key(&raw) else {
                    continue;
                };
                if key.created_at < cutoff && accounts.matches(&key.account) {
                    window.push_back((raw, key));
                    if window.len() > wanted {
                        window.pop_front();
                    }
                }
            }
        }

        debug!(scanned, matched = window.len(), "Entry scan finished");

        if window.len() < wanted {
            return Ok(None);
        }
        let Some((raw, key)) = window.pop_front() else {
            return Ok(None);
        };

        let payload: Option<Vec<u8>> =
            sqlx::query_scalar("SELECT payload FROM entries WHERE sort_key = ?")
                .bind(&raw)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to load entry payload"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to finish read transaction"))?;

        match payload {
            Some(bytes) => Ok(Some(Entry::from_parts(key, EntryPayload::from_bytes(&bytes)?))),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn prune_before(&self, cutoff: i64) -> Result<u64, DomainError> {
        let mut tx = self
            .write_pool
            .begin()
            .await
            .map_err(db_error("Failed to begin prune transaction"))?;

        let mut stale: Vec<Vec<u8>> = Vec::new();
        {
            let mut rows = sqlx::query_as::<_, (Vec<u8>,)>(SCAN_KEYS).fetch(&mut *tx);
            while let Some((raw,)) = rows
                .try_next()
                .await
                .map_err(db_error("Failed to scan entries for pruning"))?
            {
                if let Some(key) = Self::decode_key(&raw) {
                    if key.created_at < cutoff {
                        stale.push(raw);
                    }
                }
            }
        }

        let mut deleted = 0u64;
        for key in &stale {
            let result = sqlx::query("DELETE FROM entries WHERE sort_key = ?")
                .bind(key)
                .execute(&mut *tx)
                .await
                .map_err(db_error("Failed to delete entry"))?;
            deleted += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit prune transaction"))?;

        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.read_pool)
            .await
            .map_err(db_error("Failed to count entries"))?;

        Ok(count as u64)
    }
}
