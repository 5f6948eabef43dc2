//! Application entry point.
//!
//! Loads configuration, initializes tracing, sets up the Axum router with the
//! single route, and starts the HTTP server. Any failure on this path
//! propagates out of `main` and terminates the process with a non-zero exit
//! status.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo_server::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, ENV_CONFIG_PATH};
use demo_server::http::HttpServer;
use demo_server::routes::create_router;
use demo_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (tracing format depends on it, so config comes first)
    let config_path =
        std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&config_path)?;

    // Initialize tracing with priority: env > default
    let log_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Bind and serve until the process is terminated
    let server = HttpServer::bind(&config.http).await?;
    server.serve(app).await?;

    Ok(())
}
