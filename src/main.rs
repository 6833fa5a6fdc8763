//! Rental pricing HTTP server.
//!
//! Environment:
//! - `RENTAL_PRICING_ADDR`: listen address, default `0.0.0.0:3000`
//! - `RENTAL_PRICING_CONFIG`: optional YAML rules file; the standard tariff is used otherwise
//! - `RUST_LOG`: tracing filter, default `info`

use std::env;

use rental_pricing::api::{AppState, create_router};
use rental_pricing::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::var("RENTAL_PRICING_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading pricing rules");
            ConfigLoader::load(path)?
        }
        Err(_) => {
            info!("Using standard pricing rules");
            ConfigLoader::default()
        }
    };

    let addr = env::var("RENTAL_PRICING_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Rental pricing server listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
