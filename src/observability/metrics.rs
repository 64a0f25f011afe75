//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirect_resolutions_total` (counter): lookups by outcome
//!   (`redirect` or `delegate`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Result of a single path lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redirect,
    Delegate,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Redirect => "redirect",
            Outcome::Delegate => "delegate",
        }
    }
}

/// Install the Prometheus recorder with an HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_resolution(outcome: Outcome) {
    metrics::counter!("redirect_resolutions_total", "outcome" => outcome.as_str()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Redirect.as_str(), "redirect");
        assert_eq!(Outcome::Delegate.as_str(), "delegate");
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        record_resolution(Outcome::Redirect);
        record_resolution(Outcome::Delegate);
    }
}
