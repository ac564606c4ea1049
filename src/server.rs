// ABOUTME: Server resources container and HTTP serve loop for the Plano fitness plan API
// ABOUTME: Assembles routes, middleware layers, and graceful shutdown handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. The configuration
//! and the LLM provider are constructed once at startup and shared via `Arc`,
//! so handlers receive explicit collaborators instead of module-level
//! singletons, and tests can substitute a fake provider.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::environment::ServerConfig;
use crate::llm::LlmProvider;
use crate::routes::{HealthRoutes, PlanRoutes, UiRoutes};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    /// The completion provider used for plan generation
    pub llm: Arc<dyn LlmProvider>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { config, llm }
    }
}

/// Build the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(UiRoutes::routes())
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(PlanRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind the configured port and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let app = router(resources);

    let listener = TcpListener::bind(addr).await?;
    info!("Plano Fitness API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Plano Fitness API shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {e}");
    }
}
