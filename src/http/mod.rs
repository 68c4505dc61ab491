//! Inbound HTTP surface.
//!
//! # Data Flow
//! ```text
//! POST /proxy (JSON Job)
//!     → server.rs (parse body, hand off to the execution engine)
//!     → job::engine (race outbound call vs. deadline)
//!     → response.rs (ExecutionResult → caller-visible status + JSON)
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
