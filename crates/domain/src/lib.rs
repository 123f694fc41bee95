//! Planeboard Domain Layer
pub mod config;
pub mod dns_answer;
pub mod entry;
pub mod errors;
pub mod group;
pub mod record_query;
pub mod sort_key;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_answer::{Answer, AnswerData, Question, QuestionType, FALLBACK_TEXT, PLACEHOLDER_ADDRESS};
pub use entry::{Entry, EntryPayload, IncomingMessage, CREATED_AT_LAYOUT};
pub use errors::DomainError;
pub use group::GroupTable;
pub use record_query::{AccountFilter, RecordQuery, Scope, MAX_LABELS};
pub use sort_key::SortKey;
