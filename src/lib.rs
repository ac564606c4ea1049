// ABOUTME: Main library entry point for the Plano fitness plan API
// ABOUTME: Wires configuration, LLM provider access, plan formatting, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

#![deny(unsafe_code)]

//! # Plano Fitness API
//!
//! A web service that generates personalized workout and diet plans. The
//! client submits three inputs (age, training level, goal); the server builds
//! a natural-language instruction from a fixed rules document, sends it to a
//! hosted chat-completion API in JSON mode, validates the returned plan
//! against the expected shape, and serves it back to the tabbed client view.
//!
//! ## Architecture
//!
//! - **`llm`**: provider abstraction and the OpenAI chat-completions client
//! - **`plan`**: prompt construction and completion validation (pure logic)
//! - **`routes`**: HTTP endpoints (plan generation, health, client page)
//! - **`models`**: domain vocabulary, plan shapes, declared persistence records
//! - **`config`** / **`logging`** / **`errors`**: environment configuration,
//!   structured logging, and the unified error type
//! - **`server`**: dependency-injection container and the serve loop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plano_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Plano Fitness API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment and server configuration
pub mod config;
/// Unified error types and HTTP error responses
pub mod errors;
/// LLM provider abstraction and OpenAI client
pub mod llm;
/// Logging configuration and structured logging setup
pub mod logging;
/// Domain models: levels, goals, plan shapes, declared persistence records
pub mod models;
/// Plan prompt construction and completion validation
pub mod plan;
/// HTTP route handlers organized by domain
pub mod routes;
/// Server resources and the serve loop
pub mod server;
