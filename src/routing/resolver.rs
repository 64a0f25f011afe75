//! Path resolution and dispatch.
//!
//! # Responsibilities
//! - Own the compiled PathMapping
//! - Answer a request path with a redirect or a delegation
//! - Forward misses to the fallback service untouched
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, no locks)
//! - O(1) exact lookup via HashMap
//! - The fallback is any tower Service; it is never inspected

use std::borrow::Cow;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use percent_encoding::percent_decode_str;
use tower::{Service, ServiceExt};

use crate::config::paths::{self, ParseError};
use crate::http::request::RequestIdExt;
use crate::http::response::Redirect;
use crate::observability::metrics;
use crate::routing::mapping::PathMapping;

/// Outcome of resolving a single request path.
#[derive(Debug, PartialEq, Eq)]
pub enum Action<'a, F> {
    /// The path is mapped; answer with a 302 to the destination.
    Redirect(Redirect),
    /// The path is unmapped; hand the request to the fallback.
    Delegate(&'a F),
}

/// Redirects mapped paths and delegates everything else to `F`.
#[derive(Clone)]
pub struct Resolver<F> {
    mapping: Arc<PathMapping>,
    fallback: F,
}

impl<F> Resolver<F> {
    pub fn new(mapping: PathMapping, fallback: F) -> Self {
        Self {
            mapping: Arc::new(mapping),
            fallback,
        }
    }

    /// Resolve a request path.
    ///
    /// Matching is exact and case-sensitive. Callers pass the decoded path
    /// component only; a query string is never part of the key.
    pub fn resolve(&self, path: &str) -> Action<'_, F> {
        match self.mapping.get(path) {
            Some(destination) => {
                tracing::debug!(path = %path, location = %destination, "Redirecting");
                metrics::record_resolution(metrics::Outcome::Redirect);
                Action::Redirect(Redirect::found(destination))
            }
            None => {
                tracing::debug!(path = %path, "No redirect mapped, delegating to fallback");
                metrics::record_resolution(metrics::Outcome::Delegate);
                Action::Delegate(&self.fallback)
            }
        }
    }

    pub fn mapping(&self) -> &PathMapping {
        &self.mapping
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Percent-decode a request path into its lookup key.
///
/// A path whose decoded bytes are not UTF-8 is looked up as sent.
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

impl<F> std::fmt::Debug for Resolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("paths", &self.mapping.len())
            .finish_non_exhaustive()
    }
}

impl<F> Service<Request<Body>> for Resolver<F>
where
    F: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    F::Response: IntoResponse,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness of the fallback is driven by `oneshot` on a clone.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let redirect = {
            let path = decode_path(req.uri().path());
            let action = self.resolve(&path);
            match action {
                Action::Redirect(redirect) => {
                    tracing::info!(
                        request_id = %req.request_id(),
                        path = %path,
                        location = %redirect.location(),
                        "Redirect issued"
                    );
                    Some(redirect)
                }
                Action::Delegate(_) => None,
            }
        };
        if let Some(redirect) = redirect {
            return Box::pin(async move { Ok::<_, Infallible>(redirect.into_response()) });
        }

        let fallback = self.fallback.clone();
        Box::pin(async move {
            let response = fallback.oneshot(req).await?;
            Ok::<_, Infallible>(response.into_response())
        })
    }
}

/// Compose a mapping and a fallback into a request handler.
pub fn map_handler<F>(mapping: PathMapping, fallback: F) -> Resolver<F> {
    Resolver::new(mapping, fallback)
}

/// Parse a YAML redirect document and compose it with a fallback.
///
/// The document must be a sequence of `path`/`url` records. Any schema
/// deviation fails the whole load and no handler is built.
pub fn yaml_handler<F>(yaml: &[u8], fallback: F) -> Result<Resolver<F>, ParseError> {
    let mapping = paths::load(yaml)?;
    Ok(map_handler(mapping, fallback))
}
