//! Redirect responses.
//!
//! # Responsibilities
//! - Turn a resolved destination into a `302 Found` with `Location`
//! - Never panic on destinations that are not valid header values
//!
//! # Design Decisions
//! - Status is always 302; axum's own `Redirect::to` answers 303
//! - Empty body, clients follow the header

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// A temporary redirect to a configured destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    /// Redirect with `302 Found`.
    pub fn found(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::FOUND
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let location = match HeaderValue::try_from(self.location.as_str()) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(
                    location = %self.location,
                    error = %e,
                    "Destination is not a valid Location header"
                );
                return (StatusCode::INTERNAL_SERVER_ERROR, "Invalid redirect destination")
                    .into_response();
            }
        };

        let mut response = Response::new(Body::empty());
        *response.status_mut() = self.status();
        response.headers_mut().insert(header::LOCATION, location);
        response
    }
}
