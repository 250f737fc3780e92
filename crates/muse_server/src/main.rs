//! Muse gateway server binary.

use muse_backends::{BackendRegistry, Credentials};
use muse_gateway::Gateway;
use muse_server::{create_router, ServerConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();
    let credentials = Credentials::from_env();
    let registry = BackendRegistry::new(credentials);
    let gateway = Arc::new(Gateway::new(Arc::new(registry)));

    let router = create_router(gateway);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "Muse gateway listening");
    axum::serve(listener, router).await?;
    Ok(())
}
