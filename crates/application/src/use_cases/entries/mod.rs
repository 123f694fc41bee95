mod ingest_entry;
mod prune_entries;

pub use ingest_entry::IngestEntryUseCase;
pub use prune_entries::PruneEntriesUseCase;
