//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use url_redirector::config::ServerConfig;
use url_redirector::http::{fallback::default_fallback, HttpServer};
use url_redirector::lifecycle::Shutdown;
use url_redirector::routing::yaml_handler;

pub const SAMPLE_YAML: &str = "\
- path: /golang
  url: https://golang.org
- path: /yaml-godoc
  url: https://godoc.org/gopkg.in/yaml.v2
";

/// A running server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a redirect server for `yaml` with the built-in fallback.
pub async fn start_server(yaml: &str) -> TestServer {
    let resolver = yaml_handler(yaml.as_bytes(), default_fallback()).expect("valid redirect document");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServerConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, resolver);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer { addr, shutdown, handle }
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
