use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestionConfig {
    /// Newline-delimited JSON source: `-` for stdin, otherwise a file path.
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            source: None,
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    1_024
}
