//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! server config (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!
//! redirect document (YAML)
//!     → paths.rs (strict parse into PathEntry[])
//!     → PathMapping (last write wins)
//!     → handed to routing::Resolver
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All server fields have defaults to allow minimal configs
//! - Unknown keys are rejected in both formats
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod paths;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use paths::{LoadError, ParseError, PathEntry};
pub use schema::{ListenerConfig, ObservabilityConfig, RedirectsConfig, ServerConfig, TimeoutConfig};
