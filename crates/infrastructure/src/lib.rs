pub mod database;
pub mod dns;
pub mod ingestion;
pub mod repositories;
