use planeboard_infrastructure::repositories::SqliteEntryRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub entry: Arc<SqliteEntryRepository>,
}

impl Repositories {
    pub fn new(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            entry: Arc::new(SqliteEntryRepository::new(write_pool, read_pool)),
        }
    }
}
