//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy worker.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WorkerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Per-job defaults applied when the caller omits a value.
    pub defaults: JobDefaults,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3010").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3010".to_string(),
        }
    }
}

/// Defaults for caller-omitted job fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JobDefaults {
    /// Deadline applied when a job carries no timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}
