//! Outbound request construction.
//!
//! # Responsibilities
//! - Translate a validated Job into an `http::Request` ready to send
//! - Apply every header and cookie pair from the job
//! - Attach the payload only when it is non-empty
//!
//! No network I/O happens here; the engine owns dispatch.

use axum::{
    body::Body,
    http::{
        header::{HeaderName, HeaderValue, COOKIE},
        Request,
    },
};

use crate::job::error::JobError;
use crate::job::types::{Job, JobMethod};

/// Build the outbound request for a job.
///
/// The method has already been validated by the engine; errors here mean
/// the job carried header or cookie material that cannot be encoded, or a
/// URL the http layer rejects.
pub fn build_request(job: &Job, method: JobMethod) -> Result<Request<Body>, JobError> {
    let mut request = Request::builder()
        .method(method.as_http())
        .uri(job.url.as_str());

    if let Some(headers) = request.headers_mut() {
        for (key, value) in &job.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| JobError::Validation(format!("invalid header name {key:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| JobError::Validation(format!("invalid value for header {key:?}: {e}")))?;
            headers.insert(name, value);
        }

        if !job.cookies.is_empty() {
            let folded = fold_cookies(job);
            let value = HeaderValue::from_str(&folded)
                .map_err(|e| JobError::Validation(format!("invalid cookie value: {e}")))?;
            headers.insert(COOKIE, value);
        }
    }

    // An empty payload must not override transport defaults, so only a
    // non-empty body is attached.
    let body = if job.body.is_empty() {
        Body::empty()
    } else {
        Body::from(job.body.clone())
    };

    request
        .body(body)
        .map_err(|e| JobError::Validation(format!("failed to build request: {e}")))
}

/// Fold the job's cookie pairs into a single request `Cookie` header value.
fn fold_cookies(job: &Job) -> String {
    let mut folded = String::new();
    for (name, value) in &job.cookies {
        if !folded.is_empty() {
            folded.push_str("; ");
        }
        folded.push_str(name);
        folded.push('=');
        folded.push_str(value);
    }
    folded
}
