//! Credserver: a credential broker HTTP endpoint.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file (falling back to built-in defaults when none exists), initializes
//! tracing, builds the credential record and the Axum router, and starts the
//! HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use credserver::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use credserver::credentials::CredentialRecord;
use credserver::http::start_server;
use credserver::routes::create_router;
use credserver::state::AppState;

/// Credserver: a credential broker HTTP endpoint
#[derive(Parser, Debug)]
#[command(name = "credserver", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "credserver=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing init: the log format comes from it.
    // A missing file at the default path means "run with defaults"; an
    // explicitly passed path must exist.
    let config = if args.config == DEFAULT_CONFIG_PATH && !Path::new(&args.config).exists() {
        AppConfig::default()
    } else {
        AppConfig::load(&args.config)?
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // Build the credential record served on the root path
    let record = CredentialRecord::from_config(&config.credentials);
    tracing::info!(
        server = %record.server,
        database = %record.database,
        username = %record.username,
        "Credential record loaded"
    );

    // Create application state and router
    let state = AppState::new(config.clone(), record);
    let app = create_router(state);

    // Start server; blocks until shutdown
    start_server(app, &config).await?;

    Ok(())
}
