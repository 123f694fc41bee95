use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetentionConfig {
    /// Entries older than this many seconds are pruned.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_window_secs() -> u64 {
    3 * 60 * 60
}

fn default_sweep_interval_secs() -> u64 {
    15 * 60
}
