mod database;
mod errors;
mod feed;
mod groups;
mod ingestion;
mod logging;
mod retention;
mod root;
mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use feed::FeedConfig;
pub use groups::GroupConfig;
pub use ingestion::IngestionConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use retention::RetentionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
