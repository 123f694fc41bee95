pub mod dns;
pub mod entries;

// Re-export use cases
pub use dns::AnswerQuestionUseCase;
pub use entries::{IngestEntryUseCase, PruneEntriesUseCase};
