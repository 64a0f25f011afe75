//! Built-in fallback used when no other handler is supplied.

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};

/// Default fallback: a greeting on `/`, 404 for everything else.
pub fn default_fallback() -> Router {
    Router::new().route("/", get(hello)).fallback(not_found)
}

async fn hello() -> &'static str {
    "Hello, world!"
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route or redirect for path");
    (StatusCode::NOT_FOUND, format!("No redirect for {}", uri.path()))
}
