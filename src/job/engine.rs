//! Job execution engine.
//!
//! # Responsibilities
//! - Validate a job (method whitelist, URL) before any network work
//! - Dispatch exactly one outbound attempt per job on its own task
//! - Race call-completion against the job's deadline
//! - Reduce the race to a single terminal `ExecutionResult`
//!
//! The race is the only suspension point in the pipeline. Whichever arm
//! resolves first determines the terminal state; once the deadline fires,
//! the in-flight attempt is aborted and any late result is discarded.

use axum::body::Body;
use http_body_util::BodyExt;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::error::Error as StdError;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::job::builder::build_request;
use crate::job::error::JobError;
use crate::job::types::{ExecutionResult, Job, JobMethod};

/// What the outbound task delivers back to the engine.
#[derive(Debug)]
enum CallOutcome {
    /// The origin answered: status code and collected body bytes.
    Response { status_code: u16, body: Vec<u8> },
    /// The call failed at the transport level, with the full error chain.
    Failed(Vec<String>),
}

/// Executes jobs: one outbound attempt each, under a hard deadline.
///
/// Cloning is cheap; the underlying hyper client is a shared handle and
/// no per-job state lives on the engine.
#[derive(Clone)]
pub struct ExecutionEngine {
    client: Client<HttpConnector, Body>,
    default_timeout: Duration,
}

impl ExecutionEngine {
    /// Create an engine. `default_timeout_secs` applies to jobs that omit
    /// a timeout (or pass 0).
    pub fn new(default_timeout_secs: u64) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            default_timeout: Duration::from_secs(default_timeout_secs),
        }
    }

    /// Execute one job to its terminal result.
    ///
    /// Returns `Err` only for pre-dispatch validation failures; every
    /// outcome of the race itself — completion, transport failure,
    /// timeout — is data on the `ExecutionResult`.
    pub async fn execute(&self, job: Job) -> Result<ExecutionResult, JobError> {
        let method = JobMethod::parse(&job.method)?;
        validate_url(&job.url)?;

        let timeout = if job.timeout == 0 {
            self.default_timeout
        } else {
            Duration::from_secs(job.timeout)
        };
        let timeout_secs = timeout.as_secs();

        let request = build_request(&job, method)?;

        // Buffer of one: at most one outcome is ever sent, so the
        // outbound task can never block on delivery, even after the
        // receiver has moved on.
        let (tx, mut rx) = mpsc::channel(1);
        let client = self.client.clone();
        let in_flight = tokio::spawn(perform_request(client, job, request, tx));

        tokio::select! {
            () = tokio::time::sleep(timeout) => {
                // Abort rather than letting the call run to completion,
                // so the connection is released on the timeout path too.
                in_flight.abort();
                tracing::warn!(timeout_secs, "Job timed out");
                Ok(ExecutionResult::timed_out(timeout_secs))
            }
            outcome = rx.recv() => {
                match outcome {
                    Some(CallOutcome::Response { status_code, body }) => {
                        Ok(ExecutionResult::completed(status_code, body))
                    }
                    Some(CallOutcome::Failed(errors)) => {
                        Ok(ExecutionResult::transport_failure(errors))
                    }
                    // Sender dropped without a value: the task died before
                    // delivering. Report it as a transport failure rather
                    // than hanging or panicking.
                    None => Ok(ExecutionResult::transport_failure(vec![
                        "outbound request task terminated unexpectedly".to_string(),
                    ])),
                }
            }
        }
    }
}

/// Reject jobs with a missing or unparseable target URL.
fn validate_url(url: &str) -> Result<(), JobError> {
    if url.is_empty() {
        return Err(JobError::Validation("url must not be empty".to_string()));
    }
    url::Url::parse(url)
        .map_err(|e| JobError::Validation(format!("invalid url {url:?}: {e}")))?;
    Ok(())
}

/// Run the outbound call and deliver exactly one outcome.
///
/// Runs on its own task so the engine can keep watching the deadline;
/// if the engine has already timed out, the send simply fails and the
/// outcome is discarded.
async fn perform_request(
    client: Client<HttpConnector, Body>,
    job: Job,
    request: axum::http::Request<Body>,
    tx: mpsc::Sender<CallOutcome>,
) {
    tracing::debug!(url = %job.url, method = %job.method, "Sending outbound request");

    let outcome = match client.request(request).await {
        Ok(response) => {
            let status_code = response.status().as_u16();
            match response.into_body().collect().await {
                Ok(collected) => {
                    let body = collected.to_bytes().to_vec();
                    tracing::info!(
                        url = %job.url,
                        method = %job.method,
                        status_code,
                        body_size = body.len(),
                        "Outbound request completed"
                    );
                    CallOutcome::Response { status_code, body }
                }
                Err(e) => {
                    let errors = error_chain(&e);
                    tracing::error!(url = %job.url, errors = ?errors, "Failed to read origin response body");
                    CallOutcome::Failed(errors)
                }
            }
        }
        Err(e) => {
            let errors = error_chain(&e);
            tracing::error!(url = %job.url, method = %job.method, errors = ?errors, "Outbound request failed");
            CallOutcome::Failed(errors)
        }
    };

    let _ = tx.send(outcome).await;
}

/// Flatten an error and its sources into an ordered list of descriptions.
/// The caller gets every failure on the path, not just the outermost one.
fn error_chain(error: &dyn StdError) -> Vec<String> {
    let mut errors = vec![error.to_string()];
    let mut source = error.source();
    while let Some(inner) = source {
        errors.push(inner.to_string());
        source = inner.source();
    }
    errors
}
