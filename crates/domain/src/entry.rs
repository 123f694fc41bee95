use crate::errors::DomainError;
use crate::sort_key::SortKey;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Layout of the platform's `created_at` field, e.g. `Mon Jan 02 15:04:05 -0700 2006`.
pub const CREATED_AT_LAYOUT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Stored body of an entry. Serialized as JSON in the store's value column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub text: String,
    /// Handle as the platform spelled it; the key holds the lowercased form.
    pub author: String,
}

impl EntryPayload {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DomainError> {
        serde_json::to_vec(self).map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub account: String,
    pub created_at: i64,
    pub payload: EntryPayload,
}

impl Entry {
    pub fn new(
        id: i64,
        account: &str,
        created_at: i64,
        text: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let author = account.to_string();
        let account = account.to_lowercase();
        SortKey::validate_account(&account)?;
        Ok(Self {
            id,
            account,
            created_at,
            payload: EntryPayload {
                text: text.into(),
                author,
            },
        })
    }

    pub fn from_parts(key: SortKey, payload: EntryPayload) -> Self {
        Self {
            id: key.id,
            account: key.account,
            created_at: key.created_at,
            payload,
        }
    }

    pub fn sort_key(&self) -> Result<SortKey, DomainError> {
        SortKey::new(self.created_at, &self.account, self.id)
    }

    /// Text served in a TXT answer.
    pub fn answer_text(&self) -> String {
        format!("{} - @{}", self.payload.text, self.payload.author)
    }
}

/// One message as delivered by an ingestion producer, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: i64,
    pub account: String,
    #[serde(rename = "created_at")]
    pub created_at_raw: String,
    pub text: String,
}

impl IncomingMessage {
    pub fn created_at(&self) -> Result<i64, DomainError> {
        DateTime::parse_from_str(self.created_at_raw.trim(), CREATED_AT_LAYOUT)
            .map(|dt| dt.timestamp())
            .map_err(|e| {
                DomainError::InvalidTimestamp(format!("{:?}: {}", self.created_at_raw, e))
            })
    }

    pub fn into_entry(self) -> Result<Entry, DomainError> {
        let created_at = self.created_at()?;
        Entry::new(self.id, &self.account, created_at, self.text)
    }
}
