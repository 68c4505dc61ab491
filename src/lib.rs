//! Proxy Worker Library
//!
//! A single-hop HTTP forwarding worker: callers submit a job (method,
//! URL, headers, cookies, body, timeout) and receive the origin's
//! response, a transport failure, or a timeout — never silence.
//!
//! ```text
//! POST /proxy ──▶ http::server ──▶ job::engine ──┬──▶ origin call ─┐
//!                                                │                 │ first to
//!                                                └──▶ deadline ────┤ resolve
//!                                                                  ▼ wins
//!                          caller ◀── http::response ◀── ExecutionResult
//! ```

pub mod config;
pub mod http;
pub mod job;
pub mod lifecycle;
pub mod observability;

pub use config::WorkerConfig;
pub use http::HttpServer;
pub use job::{ExecutionEngine, ExecutionResult, Job, Outcome};
pub use lifecycle::Shutdown;
