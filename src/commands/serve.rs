//! Serve command - run the HTTP API server

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api;
use crate::config::PortalConfig;
use crate::portal::Portal;
use crate::tools::{get_tool_path, tools};

pub async fn execute(mut config: PortalConfig, port: Option<u16>) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    if config.mock.enabled {
        info!("Mock mode enabled: clio is never invoked, deploys are simulated");
    } else {
        let clio = get_tool_path(tools::CLIO);
        if which::which(&clio).is_err() {
            warn!(
                binary = %clio,
                "clio binary not found on PATH; deploys will fail until it is installed \
                 (set CLIO_BIN to point at it, or enable mock mode)"
            );
        }
    }

    let portal = Arc::new(Portal::new(&config));
    let router = api::create_router(portal, &config.server.cors_origin);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        environments = config.environments.len(),
        "Server running on http://{}", addr
    );

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
