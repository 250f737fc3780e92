//! Configuration for the HTTP front door.

use derive_getters::Getters;

/// Front door configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "0.0.0.0:8787")
    bind_addr: String,
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `MUSE_BIND_ADDR` (default: "0.0.0.0:8787")
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("MUSE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
        ServerConfigBuilder::default()
            .bind_addr(bind_addr)
            .build()
            .expect("Valid ServerConfig")
    }
}
