//! Path-based URL redirector library.
//!
//! Maps exact request paths to redirect destinations and hands every other
//! request to a fallback service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{map_handler, yaml_handler, Action, PathMapping, Resolver};
