//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the Resolver as its fallback service
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop gracefully when the shutdown signal fires

use std::convert::Infallible;
use std::time::Duration;

use axum::{body::Body, http::Request, response::IntoResponse, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Service;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown;
use crate::routing::Resolver;

/// HTTP server answering redirects.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a composed resolver.
    pub fn new<F>(config: &ServerConfig, resolver: Resolver<F>) -> Self
    where
        F: Service<Request<Body>, Error = Infallible> + Clone + Send + Sync + 'static,
        F::Response: IntoResponse,
        F::Future: Send + 'static,
    {
        tracing::info!(paths = resolver.len(), "Redirect table installed");
        let router = Self::build_router(config, resolver);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router<F>(config: &ServerConfig, resolver: Resolver<F>) -> Router
    where
        F: Service<Request<Body>, Error = Infallible> + Clone + Send + Sync + 'static,
        F::Response: IntoResponse,
        F::Future: Send + 'static,
    {
        Router::new()
            .fallback_service(resolver)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for driving requests without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}
