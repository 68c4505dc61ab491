//! Job error definitions.
//!
//! Only pre-dispatch failures are Rust errors. Transport failures and
//! deadline expiry are carried as data on `ExecutionResult` — the caller
//! needs the full ordered error list, not just the first failure.

use thiserror::Error;

/// Errors detected before a job is dispatched.
#[derive(Debug, Error)]
pub enum JobError {
    /// Malformed job: unsupported method, missing or unparseable URL,
    /// header material that cannot be encoded. Never reaches the race.
    #[error("{0}")]
    Validation(String),
}
