//! URL redirector.
//!
//! Answers mapped paths with `302 Found` and everything else with the
//! built-in fallback.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request       ┌──────────────────────────────────────────────┐
//!     ─────────────────────┼─▶ http server ──▶ routing::Resolver          │
//!                          │   (request id,     │                         │
//!                          │    timeout,        ├─ hit  ─▶ 302 Location   │
//!                          │    trace)          └─ miss ─▶ fallback       │
//!                          │                                              │
//!                          │   config (TOML + YAML) ──▶ PathMapping       │
//!                          │   observability · lifecycle                  │
//!                          └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use url_redirector::config::{self, loader, validation, ServerConfig};
use url_redirector::http::{fallback::default_fallback, HttpServer};
use url_redirector::lifecycle::{signals::shutdown_signal, Shutdown};
use url_redirector::observability::{logging, metrics};
use url_redirector::routing::map_handler;

#[derive(Parser)]
#[command(name = "url-redirector")]
#[command(about = "Redirect request paths to configured URLs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve redirects over HTTP
    Serve {
        /// Server configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Redirect document (YAML), overrides `redirects.file`
        #[arg(short, long)]
        paths: Option<PathBuf>,

        /// Bind address, overrides `listener.bind_address`
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Strictly load a redirect document and print its table
    Check {
        /// Redirect document (YAML)
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, paths, bind } => serve(config, paths, bind).await,
        Commands::Check { file } => check(file),
    }
}

async fn serve(
    config_path: Option<PathBuf>,
    paths: Option<PathBuf>,
    bind: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &config_path {
        Some(path) => loader::load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(paths) = paths {
        config.redirects.file = Some(paths);
    }
    if let Some(bind) = bind {
        config.listener.bind_address = bind;
    }
    validation::validate_config(&config).map_err(config::ConfigError::Validation)?;

    logging::init_logging(&config.observability);

    tracing::info!("url-redirector v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        redirects_file = ?config.redirects.file,
        "Configuration loaded"
    );

    // A table that fails to load means no handler gets installed.
    let mapping = match loader::build_mapping(&config.redirects) {
        Ok(mapping) => mapping,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load redirect table");
            return Err(config::ConfigError::from(e).into());
        }
    };
    let resolver = map_handler(mapping, default_fallback());

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, resolver);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    shutdown_signal().await;
    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn check(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mapping = config::paths::load_file(&file)?;

    for (path, url) in mapping.sorted() {
        println!("{path} -> {url}");
    }
    println!("{} redirect(s) in {}", mapping.len(), file.display());
    Ok(())
}
