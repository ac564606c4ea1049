// ABOUTME: Environment-based configuration loading for the Plano fitness plan API
// ABOUTME: Server port, logging level, LLM service credentials, and declared database credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Server configuration from environment variables.
//!
//! `ServerConfig::from_env` is the single place the process environment is
//! consulted. The resulting struct is wrapped in an `Arc` and handed to the
//! server resources, so handlers and providers receive explicit configuration
//! instead of reaching for process-wide state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Default HTTP port for the API
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default chat-completion endpoint base URL
const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier for plan generation
const DEFAULT_LLM_MODEL: &str = "gpt-4o";

/// Default sampling temperature for plan generation
const DEFAULT_PLAN_TEMPERATURE: f32 = 0.8;

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages and above
    Info,
    /// Debug messages and above
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse a level string, falling back to `Info` for unknown values
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// String form accepted by `RUST_LOG`-style filters
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// External Model Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmServiceConfig {
    /// API key for the hosted completion service; required on the serve path
    pub api_key: Option<String>,
    /// Base URL of the chat-completions API
    pub base_url: String,
    /// Model identifier used for plan generation
    pub model: String,
    /// Sampling temperature used for plan generation
    pub temperature: f32,
}

/// Hosted database service credentials. Declared collaborator: no active
/// request path uses these, mirroring the forward-declared persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseServicesConfig {
    /// Database service URL
    pub url: Option<String>,
    /// Anonymous client key
    pub anon_key: Option<String>,
}

impl DatabaseServicesConfig {
    /// Whether both credentials are present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// External Model Service configuration
    pub llm: LlmServiceConfig,
    /// Declared database service credentials
    pub database: DatabaseServicesConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Honors a `.env` file when present. Defaults are applied for the port,
    /// base URL, model, and temperature; the API key and database credentials
    /// stay `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable fails to parse.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            llm: LlmServiceConfig {
                api_key: env_var_opt("OPENAI_API_KEY"),
                base_url: env_var_or("OPENAI_BASE_URL", DEFAULT_LLM_BASE_URL),
                model: env_var_or("OPENAI_MODEL", DEFAULT_LLM_MODEL),
                temperature: env_var_or(
                    "PLAN_TEMPERATURE",
                    &DEFAULT_PLAN_TEMPERATURE.to_string(),
                )
                .parse()
                .context("Invalid PLAN_TEMPERATURE value")?,
            },
            database: DatabaseServicesConfig {
                url: env_var_opt("SUPABASE_URL"),
                anon_key: env_var_opt("SUPABASE_ANON_KEY"),
            },
        };

        Ok(config)
    }

    /// One-line redacted summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} log_level={} llm.model={} llm.base_url={} llm.api_key={} database={}",
            self.http_port,
            self.log_level.as_str(),
            self.llm.model,
            self.llm.base_url,
            if self.llm.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            if self.database.is_configured() {
                "configured"
            } else {
                "unconfigured"
            },
        )
    }
}

/// Read an environment variable with a default
fn env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Read an optional environment variable, treating empty values as absent
fn env_var_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
