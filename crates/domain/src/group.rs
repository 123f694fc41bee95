use crate::config::GroupConfig;
use crate::errors::DomainError;
use std::collections::HashMap;

/// Named account groups, looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    groups: HashMap<String, Vec<String>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(groups: &HashMap<String, GroupConfig>) -> Self {
        let mut table = Self::new();
        for (name, group) in groups {
            table.insert(name, group.accounts.iter().map(String::as_str));
        }
        table
    }

    pub fn insert<'a>(&mut self, name: &str, accounts: impl IntoIterator<Item = &'a str>) {
        let accounts = accounts.into_iter().map(str::to_lowercase).collect();
        self.groups.insert(name.to_lowercase(), accounts);
    }

    pub fn members(&self, name: &str) -> Result<&[String], DomainError> {
        self.groups
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::GroupNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
