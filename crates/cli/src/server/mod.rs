pub mod dns;
pub mod ingestion;

pub use dns::start_dns_server;
pub use ingestion::spawn_ingest_source;
