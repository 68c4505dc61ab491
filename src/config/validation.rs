//! Configuration validation.
//!
//! Semantic validation on top of what serde already guarantees. Pure
//! function, returns all errors rather than stopping at the first.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::WorkerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address {address:?}: {reason}")]
    BindAddress { address: String, reason: String },

    #[error("defaults.timeout_secs must be positive")]
    ZeroDefaultTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &WorkerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress {
            address: config.listener.bind_address.clone(),
            reason: e.to_string(),
        });
    }

    if config.defaults.timeout_secs == 0 {
        errors.push(ValidationError::ZeroDefaultTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
