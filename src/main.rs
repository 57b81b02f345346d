//! HTTP server for the cabin pricing engine.
//!
//! Environment:
//! - `CABIN_PRICING_CONFIG`: configuration directory (default `./config/cabins`)
//! - `CABIN_PRICING_ADDR`: bind address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cabin_pricing::api::{AppState, create_router};
use cabin_pricing::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/cabins";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var("CABIN_PRICING_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("CABIN_PRICING_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, config_dir = %config_dir, "Cabin pricing server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
