//! Travel Assistant API
//!
//! Serves a fixed catalog of travel destination recommendations over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────┐
//!     ───────────────────▶│  http (axum router + tower-http middleware)  │
//!                         │        │                                     │
//!                         │        ▼                                     │
//!                         │  query service ──reads──▶ catalog store      │
//!                         │        │                  (immutable, Arc)   │
//!     Client Response     │        ▼                                     │
//!     ◀───────────────────│  JSON response / {"detail": ...}             │
//!                         │                                              │
//!                         │  config · observability · lifecycle          │
//!                         └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use url::Url;

use travel_assistant::config::{self, AppConfig};
use travel_assistant::lifecycle::Shutdown;
use travel_assistant::observability::{logging, metrics};
use travel_assistant::{catalog, HttpServer};

#[derive(Parser)]
#[command(name = "travel-assistant", version)]
#[command(about = "Travel destination recommendations API", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults plus environment overrides when omitted.
    #[arg(short, long, env = "TRAVEL_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Before argument parsing so TRAVEL_CONFIG may come from `.env`.
    let dotenv = config::load_dotenv(None);
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::from_env()?,
    };

    logging::init(&config.observability.log_level);

    tracing::info!("travel-assistant v{} starting", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "Loaded environment file"),
        Ok(None) => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }
    log_config(&config, args.config.as_deref().map(|p| p.display().to_string()));

    let catalog = catalog::load(&config.catalog)?;
    tracing::info!(records = catalog.len(), "Catalog ready");

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, catalog);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn log_config(config: &AppConfig, source: Option<String>) {
    tracing::info!(
        source = source.as_deref().unwrap_or("defaults+env"),
        bind_address = %config.listener.bind_address,
        cors_origins = ?config.cors.allowed_origins,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    if let Some(url) = &config.database.url {
        tracing::info!(
            database_url = %redact(url),
            "Database URL configured; the API serves from memory and does not connect"
        );
    }
}

/// Strip the password from a connection URL for logging.
fn redact(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("****"));
            }
            url.to_string()
        }
        Err(_) => "<invalid>".to_string(),
    }
}
