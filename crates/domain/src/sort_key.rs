//! Order-preserving key for stored entries.
//!
//! Layout of the encoded form:
//!
//! ```text
//! [created_at: 8 bytes BE] 0x00 [account bytes] 0x00 [id: 8 bytes BE]
//! ```
//!
//! Both integers have their sign bit flipped before being written, so the
//! big-endian bytes of any `i64` compare in numeric order. Byte-wise
//! comparison of two encoded keys therefore orders by `created_at`, then
//! `account`, then `id`.

use crate::errors::DomainError;

const SEPARATOR: u8 = 0x00;
const INT_WIDTH: usize = 8;
const SIGN_BIT: u64 = 1 << 63;

/// Smallest valid encoding: two integers, two separators, one account byte.
const MIN_ENCODED_LEN: usize = INT_WIDTH * 2 + 2 + 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortKey {
    pub created_at: i64,
    pub account: String,
    pub id: i64,
}

impl SortKey {
    /// Build a key, case-folding the account.
    pub fn new(created_at: i64, account: &str, id: i64) -> Result<Self, DomainError> {
        let account = account.to_lowercase();
        Self::validate_account(&account)?;
        Ok(Self {
            created_at,
            account,
            id,
        })
    }

    pub fn validate_account(account: &str) -> Result<(), DomainError> {
        if account.is_empty() {
            return Err(DomainError::InvalidAccount("account is empty".to_string()));
        }
        if account.as_bytes().contains(&SEPARATOR) {
            return Err(DomainError::InvalidAccount(format!(
                "account contains a NUL byte: {:?}",
                account
            )));
        }
        Ok(())
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(INT_WIDTH * 2 + 2 + self.account.len());
        out.extend_from_slice(&encode_i64(self.created_at));
        out.push(SEPARATOR);
        out.extend_from_slice(self.account.as_bytes());
        out.push(SEPARATOR);
        out.extend_from_slice(&encode_i64(self.id));
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() < MIN_ENCODED_LEN {
            return Err(DomainError::MalformedKey(format!(
                "expected at least {} bytes, got {}",
                MIN_ENCODED_LEN,
                bytes.len()
            )));
        }

        let (created_at, rest) = bytes.split_at(INT_WIDTH);
        let (middle, id) = rest.split_at(rest.len() - INT_WIDTH);

        if middle[0] != SEPARATOR || middle[middle.len() - 1] != SEPARATOR {
            return Err(DomainError::MalformedKey(
                "missing field separator".to_string(),
            ));
        }

        let account = &middle[1..middle.len() - 1];
        if account.contains(&SEPARATOR) {
            return Err(DomainError::MalformedKey(
                "unexpected field separator in account".to_string(),
            ));
        }
        let account = std::str::from_utf8(account)
            .map_err(|e| DomainError::MalformedKey(format!("account is not UTF-8: {}", e)))?;

        Ok(Self {
            created_at: decode_i64(created_at),
            account: account.to_string(),
            id: decode_i64(id),
        })
    }
}

fn encode_i64(value: i64) -> [u8; INT_WIDTH] {
    ((value as u64) ^ SIGN_BIT).to_be_bytes()
}

fn decode_i64(bytes: &[u8]) -> i64 {
    let mut buf = [0u8; INT_WIDTH];
    buf.copy_from_slice(bytes);
    (u64::from_be_bytes(buf) ^ SIGN_BIT) as i64
}
