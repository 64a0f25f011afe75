//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign/propagate request ID)
//!     → routing::Resolver (installed as the router fallback)
//!         ├─ hit  → response.rs (302 + Location)
//!         └─ miss → fallback.rs (or any caller-supplied service)
//!     → Send to client
//! ```

pub mod fallback;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use response::Redirect;
pub use server::HttpServer;
