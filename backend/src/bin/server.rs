//! Numerology HTTP Server Binary
//!
//! Main entry point for the numerology REST API server.
//! It loads configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin numerology-server
//!
//! # With an explicit config file
//! NUMEROLOGY_CONFIG=/etc/numerology.toml cargo run --bin numerology-server
//! ```
//!
//! # Environment Variables
//!
//! - `NUMEROLOGY_CONFIG`: Path to the TOML config file (default: search `numerology.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `MAHADASHA_END_YEAR`: Last mahadasha start year (default: 2030)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use numerology_api::config::NumerologyConfig;
use numerology_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Numerology HTTP Server");

    let config = NumerologyConfig::load()?;
    info!(
        mahadasha_end_year = config.numerology.mahadasha_end_year,
        "Configuration loaded"
    );

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
