use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FeedConfig {
    /// Zone suffix that query names must carry, e.g. `tweets.example.com`.
    #[serde(default)]
    pub host: String,
}
