// ABOUTME: Configuration management module for the Plano fitness plan API
// ABOUTME: Centralizes environment-driven server, LLM, and database service settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Configuration module
//!
//! Environment-only configuration: every setting is read from environment
//! variables (with a `.env` file honored in development). Configuration is
//! loaded once at startup and injected into the server resources; modules
//! never read the environment at request time.

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseServicesConfig, LlmServiceConfig, LogLevel, ServerConfig};
