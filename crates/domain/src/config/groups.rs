use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GroupConfig {
    #[serde(default)]
    pub accounts: Vec<String>,
}
