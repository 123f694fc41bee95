mod entry_repository;

pub use entry_repository::EntryRepository;

// Re-export for convenience
pub use planeboard_domain::AccountFilter;
