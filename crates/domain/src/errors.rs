use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query name does not contain the served host")]
    HostMismatch,

    #[error("Too many labels in query name: {0} (max 5)")]
    TooManyLabels(usize),

    #[error("Malformed sort key: {0}")]
    MalformedKey(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid entry payload: {0}")]
    InvalidPayload(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Ingestion delivery failed: {0}")]
    IngestionDelivery(String),
}
