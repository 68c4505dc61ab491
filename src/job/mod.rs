//! Job execution subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound surface hands over a parsed Job
//!     → engine.rs (validate method + URL, compute deadline)
//!     → builder.rs (Job → outbound http::Request)
//!     → engine.rs (race: outbound call vs. deadline timer)
//!     → ExecutionResult (Completed / TransportFailure / TimedOut)
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod types;

pub use engine::ExecutionEngine;
pub use error::JobError;
pub use types::{ExecutionResult, Job, JobMethod, Outcome};
