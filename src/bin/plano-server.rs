// ABOUTME: Production server binary for the Plano fitness plan API
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! # Plano Fitness API Server Binary
//!
//! Starts the plan generation API: configuration from the environment,
//! structured logging, an injected `OpenAI` provider, and the axum serve
//! loop with graceful shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use plano_server::{
    config::environment::ServerConfig,
    llm::{LlmProvider, OpenAiProvider},
    logging, server,
    server::ServerResources,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "plano-server")]
#[command(about = "Plano Fitness API - AI-generated personalized workout and diet plans")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Plano Fitness API");
    info!("{}", config.summary());

    let config = Arc::new(config);
    let llm: Arc<dyn LlmProvider> = Arc::new(
        OpenAiProvider::from_config(&config.llm)
            .context("Failed to construct the completion provider")?,
    );
    info!("Completion provider initialized: {}", llm.display_name());

    let resources = Arc::new(ServerResources::new(config, llm));
    server::run(resources).await
}
