//! Observability subsystem.
//!
//! Structured logging only: the engine and handlers emit tracing events
//! with job-scoped fields (url, method, status_code, body_size), and the
//! subscriber is initialized exactly once at process startup — never
//! from inside the engine.

pub mod logging;
