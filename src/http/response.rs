//! Mapping from execution results to caller-visible responses.
//!
//! # Responsibilities
//! - Completed → origin's own status code, body and empty error list
//! - TransportFailure → 502 Bad Gateway with the full error list
//! - TimedOut → 408 Request Timeout with the single timeout error
//!
//! 4xx/5xx origin codes pass through unchanged: they are valid HTTP
//! responses, not failures of the forwarding attempt.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::job::{ExecutionResult, Outcome};

/// Render a terminal job result for the caller.
pub fn render(result: ExecutionResult) -> Response {
    match result.outcome {
        Outcome::Completed => {
            let status = StatusCode::from_u16(result.status_code)
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                Json(json!({
                    "status_code": result.status_code,
                    "body": result.body,
                    "errs": result.errors,
                })),
            )
                .into_response()
        }
        Outcome::TransportFailure => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "errs": result.errors })),
        )
            .into_response(),
        Outcome::TimedOut => {
            let error = result
                .errors
                .first()
                .cloned()
                .unwrap_or_else(|| "request timed out".to_string());
            (StatusCode::REQUEST_TIMEOUT, Json(json!({ "error": error }))).into_response()
        }
    }
}
