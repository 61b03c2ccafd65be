//! Server entrypoint for the payroll and billing engine.

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use siteledger::api::{AppState, create_router};
use siteledger::config::ConfigLoader;
use siteledger::invoice::InMemoryMetadataStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("BILLING_CONFIG_DIR").unwrap_or_else(|_| "./config/billing".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        company = %config.company().name,
        "Billing profile loaded"
    );

    let state = AppState::new(config, Arc::new(InMemoryMetadataStore::new()));
    let router = create_router(state);

    let addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server starting");
    axum::serve(listener, router).await?;

    Ok(())
}
