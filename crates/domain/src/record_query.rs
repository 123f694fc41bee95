//! Query names look like
//!
//! ```text
//! [p<page>.][b<before>.][c<nonce>.][t.][<name>.]<host>.
//! ```
//!
//! Labels may appear in any order. When a label class repeats, the last one
//! wins.

use crate::errors::DomainError;
use crate::group::GroupTable;

pub const MAX_LABELS: usize = 5;

/// Scope name that means "every account".
pub const HOME: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Home,
    Account(String),
    Group(String),
}

/// Accounts a lookup is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    Any,
    Only(Vec<String>),
}

impl AccountFilter {
    pub fn matches(&self, account: &str) -> bool {
        match self {
            AccountFilter::Any => true,
            AccountFilter::Only(accounts) => accounts.iter().any(|a| a == account),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AccountFilter::Only(accounts) if accounts.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub name: Option<String>,
    pub before: i64,
    pub page: usize,
    pub nonce: String,
    pub topic: bool,
}

impl RecordQuery {
    /// Parse `name` against the served `host` (expected lowercase).
    /// `now` is the default for `before`.
    pub fn parse(name: &str, host: &str, now: i64) -> Result<Self, DomainError> {
        let name = name.to_lowercase();
        if !name.contains(host) {
            return Err(DomainError::HostMismatch);
        }

        let name = name.strip_suffix('.').unwrap_or(&name);
        let name = name.strip_suffix(host).unwrap_or(name);
        let name = name.strip_suffix('.').unwrap_or(name);

        let labels: Vec<&str> = name.split('.').collect();
        if labels.len() > MAX_LABELS {
            return Err(DomainError::TooManyLabels(labels.len()));
        }

        let mut query = Self {
            name: None,
            before: now,
            page: 0,
            nonce: String::new(),
            topic: false,
        };

        for label in labels {
            if let Some(rest) = label.strip_prefix('p') {
                query.page = rest.parse().unwrap_or(0);
            } else if let Some(rest) = label.strip_prefix('b') {
                query.before = rest.parse().unwrap_or(now);
            } else if let Some(rest) = label.strip_prefix('c') {
                query.nonce = rest.to_string();
            } else if label == "t" {
                query.topic = true;
            } else if !label.is_empty() {
                query.name = Some(label.to_string());
            }
        }

        Ok(query)
    }

    pub fn scope(&self) -> Scope {
        match (&self.name, self.topic) {
            (Some(name), true) => Scope::Group(name.clone()),
            (None, true) => Scope::Group(HOME.to_string()),
            (Some(name), false) if name != HOME => Scope::Account(name.clone()),
            _ => Scope::Home,
        }
    }

    /// Resolve the scope to the set of accounts to search.
    pub fn names(&self, groups: &GroupTable) -> AccountFilter {
        match self.scope() {
            Scope::Home => AccountFilter::Any,
            Scope::Account(account) => AccountFilter::Only(vec![account]),
            Scope::Group(group) => match groups.members(&group) {
                Ok(members) => AccountFilter::Only(members.to_vec()),
                Err(_) => AccountFilter::Only(Vec::new()),
            },
        }
    }
}
