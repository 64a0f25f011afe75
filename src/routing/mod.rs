//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table Compilation (at startup):
//!     PathEntry[] / inline paths
//!     → mapping.rs (fold into PathMapping, last write wins)
//!     → Freeze inside an immutable Resolver
//!
//! Incoming Request (path)
//!     → resolver.rs (exact lookup)
//!     → Redirect (302 + Location) or Delegate to fallback
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - Exact, case-sensitive matching only (no prefixes, no normalization)
//! - A miss is a normal branch, never an error

pub mod mapping;
pub mod resolver;

pub use mapping::PathMapping;
pub use resolver::{map_handler, yaml_handler, Action, Resolver};
