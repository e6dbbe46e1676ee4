use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection pool settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Upper bound on open connections. TOML: `database.max_connections`. Default: `20`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connections the pool keeps open while idle. TOML: `database.min_connections`. Default: `5`.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// How long a statement waits on a locked database before failing.
    /// TOML: `database.busy_timeout_secs`. Default: `5`.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    5
}
