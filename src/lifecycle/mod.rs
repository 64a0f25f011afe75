//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build redirect table → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: a redirect table that fails to load stops startup
//!   before anything binds
//! - No reload signal; the table is fixed for the process lifetime

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
