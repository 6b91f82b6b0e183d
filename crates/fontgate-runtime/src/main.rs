//! # Font List Gateway Runtime
//!
//! The main executable for the Font List Gateway.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (RUST_LOG honored, default `info`)
//! 2. Load configuration from environment
//! 3. Build the Google Fonts client and inject it into the service
//! 4. Serve until Ctrl+C or server error
//! 5. Graceful shutdown

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fontgate_gateway::{FontGatewayService, GatewayConfig, GoogleFontsClient};

/// Load configuration from the environment.
///
/// `PORT` defaults to 3000. Missing upstream credentials are tolerated
/// here; each font list request answers 500 until they are provided.
fn load_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();

    if let Ok(port) = std::env::var("PORT") {
        match port.parse() {
            Ok(p) => config.http.port = p,
            Err(_) => warn!(
                "PORT is not a valid port number, keeping {}",
                config.http.port
            ),
        }
    }

    if let Ok(base_url) = std::env::var("API_BASE_URL") {
        config.upstream.base_url = base_url;
    }
    if let Ok(api_key) = std::env::var("API_KEY") {
        config.upstream.api_key = api_key;
    }

    if config.upstream.is_configured() {
        info!("Loaded upstream credentials from environment");
    } else {
        warn!("API_BASE_URL or API_KEY not set, font list requests will fail");
    }

    config
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config = load_config();
    let port = config.http.port;

    // Build the upstream client and the service
    let catalog = Arc::new(GoogleFontsClient::new(config.upstream.clone()));
    let mut service = FontGatewayService::new(config, catalog)?;

    info!("Font List Gateway running on port {}", port);
    info!("Health check: http://localhost:{}/health", port);

    // Serve until Ctrl+C or server error
    tokio::select! {
        result = service.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C received, shutting down");
        }
    }

    // Graceful shutdown
    service.shutdown();

    Ok(())
}
