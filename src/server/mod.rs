//! HTTP server for the protein network analyzer.
//!
//! Provides REST API for:
//! - The full network with summary statistics
//! - Centrality rankings, communities and predicted interactions
//! - Per-protein details

mod http;

pub use http::{create_router, ApiError};

use anyhow::{Context, Result};
use crate::service::NetworkAnalyzer;

/// Bind the configured address and serve until interrupted
pub async fn serve(analyzer: NetworkAnalyzer) -> Result<()> {
    let addr = analyzer.config().bind_address.clone();
    let router = create_router(analyzer);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log::info!("Protein network API listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
