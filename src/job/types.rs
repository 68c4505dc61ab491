//! Job and result type definitions.
//!
//! A `Job` is one caller-submitted forwarding intent. It is constructed
//! once from the inbound request body, never mutated, consumed by exactly
//! one execution attempt, and discarded. Nothing here outlives a single
//! job.

use axum::http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::job::error::JobError;

/// A caller-supplied intent to perform one outbound HTTP call.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Job {
    /// Absolute target URI. Required, non-empty.
    pub url: String,

    /// HTTP method name. Validated against the allowed set before dispatch.
    pub method: String,

    /// Header name → value. Duplicate names not supported.
    pub headers: HashMap<String, String>,

    /// Cookie name → value.
    pub cookies: HashMap<String, String>,

    /// Raw request payload. Attached only when non-empty.
    pub body: String,

    /// Deadline for the whole operation, in seconds. 0 means "use default".
    pub timeout: u64,
}

/// The fixed set of HTTP methods a job may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl JobMethod {
    /// Parse a caller-supplied method name.
    ///
    /// Anything outside {GET, POST, PUT, DELETE} is rejected here, before
    /// any request is built or dispatched.
    pub fn parse(name: &str) -> Result<Self, JobError> {
        match name {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(JobError::Validation(format!(
                "invalid HTTP method: {other:?}"
            ))),
        }
    }

    /// Convert to the http crate's method type.
    pub fn as_http(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }
}

/// Terminal classification of a job's execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The outbound call returned a status and body. Includes 4xx/5xx —
    /// those are valid HTTP responses, not transport failures.
    Completed,

    /// The outbound call reported transport-level errors (DNS, connect,
    /// protocol) instead of a usable response.
    TransportFailure,

    /// The deadline elapsed before the call signaled completion.
    TimedOut,
}

/// The terminal outcome of one job.
///
/// Invariant: `status_code` and `body` are populated if and only if
/// `outcome == Completed`; `errors` is empty if and only if the job
/// completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Origin status code when completed, 0 otherwise.
    pub status_code: u16,

    /// Raw origin response bytes, present only on a completed call.
    pub body: Vec<u8>,

    /// Ordered failure descriptions. Empty on success.
    pub errors: Vec<String>,

    /// Which terminal state the job reached.
    pub outcome: Outcome,
}

impl ExecutionResult {
    /// A completed call: status and body pass through verbatim.
    pub fn completed(status_code: u16, body: Vec<u8>) -> Self {
        Self {
            status_code,
            body,
            errors: Vec::new(),
            outcome: Outcome::Completed,
        }
    }

    /// A transport failure: the original error list is preserved in order,
    /// with one synthetic marker appended noting the request did not
    /// complete.
    pub fn transport_failure(mut errors: Vec<String>) -> Self {
        errors.push("request did not complete successfully".to_string());
        Self {
            status_code: 0,
            body: Vec::new(),
            errors,
            outcome: Outcome::TransportFailure,
        }
    }

    /// A deadline expiry: exactly one synthetic timeout error, regardless
    /// of what the (discarded) call was doing.
    pub fn timed_out(timeout_secs: u64) -> Self {
        Self {
            status_code: 0,
            body: Vec::new(),
            errors: vec![format!("request timed out after {timeout_secs}s")],
            outcome: Outcome::TimedOut,
        }
    }
}
