//! HTTP server setup and job submission handling.
//!
//! # Responsibilities
//! - Create the Axum router with the submission and liveness routes
//! - Wire up middleware (tracing)
//! - Parse inbound job descriptions and hand them to the engine
//! - Translate engine results into caller-visible responses
//!
//! The server itself is a thin translation layer: all concurrency
//! coordination and failure policy live in `job::engine`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::WorkerConfig;
use crate::http::response;
use crate::job::{ExecutionEngine, Job, JobError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ExecutionEngine>,
}

/// HTTP server for the proxy worker.
pub struct HttpServer {
    router: Router,
    config: WorkerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: WorkerConfig) -> Self {
        let engine = Arc::new(ExecutionEngine::new(config.defaults.timeout_secs));
        let state = AppState { engine };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// No blanket timeout layer wraps `/proxy`: the engine enforces the
    /// per-job deadline itself.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/proxy", post(submit_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }
}

/// Job submission handler: one inbound job, one terminal response.
async fn submit_handler(State(state): State<AppState>, Json(job): Json<Job>) -> Response {
    tracing::info!(
        url = %job.url,
        method = %job.method,
        timeout = job.timeout,
        "Received proxy job"
    );

    match state.engine.execute(job).await {
        Ok(result) => {
            tracing::debug!(
                status_code = result.status_code,
                body_size = result.body.len(),
                outcome = ?result.outcome,
                "Sending response"
            );
            response::render(result)
        }
        Err(JobError::Validation(message)) => {
            tracing::warn!(error = %message, "Rejected job before dispatch");
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
    }
}

/// Liveness probe.
async fn health_handler() -> &'static str {
    "OK"
}
