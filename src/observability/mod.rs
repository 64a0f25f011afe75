//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Resolver and server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution counters)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing fields
//! - Request ID flows through every log line for a request
//! - Metrics are cheap (atomic increments); recording is a no-op when no
//!   exporter is installed

pub mod logging;
pub mod metrics;
