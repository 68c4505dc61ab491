//! Worker configuration.
//!
//! Schema is deserialized from TOML with defaults for every field, then
//! semantically validated before the server accepts it.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{JobDefaults, ListenerConfig, WorkerConfig};
pub use validation::{validate_config, ValidationError};
