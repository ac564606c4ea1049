// ABOUTME: OpenAI chat-completions provider for the Plano fitness plan API
// ABOUTME: Issues one non-streaming JSON-mode completion per plan generation request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! # `OpenAI` Provider
//!
//! Chat-completions client for the hosted `OpenAI` API (or any endpoint
//! speaking the same wire format). Configuration is injected via
//! [`LlmServiceConfig`]; the provider never reads the environment itself.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage};
use crate::config::environment::LlmServiceConfig;
use crate::errors::{AppError, ErrorCode};

/// Connection timeout for the hosted API
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Request timeout; plan completions are large but bounded
const REQUEST_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// API Request/Response Types (OpenAI wire format)
// ============================================================================

/// Chat-completions request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// Output format directive (`{"type": "json_object"}`)
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

impl ResponseFormat {
    fn json_object() -> Self {
        Self {
            format_type: "json_object".to_owned(),
        }
    }
}

/// Message structure for the chat-completions API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Chat-completions response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    model: String,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Hosted `OpenAI` chat-completions provider
#[derive(Debug)]
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    default_model: String,
}

impl OpenAiProvider {
    /// Create a provider from the injected LLM service configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no API key is configured, or an internal
    /// error if the HTTP client cannot be created.
    pub fn from_config(config: &LlmServiceConfig) -> Result<Self, AppError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::config_missing("OPENAI_API_KEY is not set"))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            default_model: config.model.clone(),
        })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Convert internal messages to the wire format
    fn convert_messages(messages: &[ChatMessage]) -> Vec<OpenAiMessage> {
        messages.iter().map(OpenAiMessage::from).collect()
    }

    /// Parse an error response body from the API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::new(
                    ErrorCode::ExternalAuthFailed,
                    format!("API authentication failed: {}", error_response.error.message),
                ),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("API rate limit exceeded: {}", error_response.error.message),
                ),
                500..=599 => AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{} - {}", error_type, error_response.error.message),
                ),
                _ => AppError::external_service(
                    "OpenAI",
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            match status.as_u16() {
                502..=504 => AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    "completion API is not responding",
                ),
                _ => AppError::external_service(
                    "OpenAI",
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    /// Map a transport-level failure to an application error
    fn map_send_error(&self, e: &reqwest::Error) -> AppError {
        error!("Failed to send request to OpenAI: {}", e);
        if e.is_connect() {
            AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("Cannot connect to the completion API at {}", self.base_url),
            )
        } else if e.is_timeout() {
            AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "completion API request timed out",
            )
        } else {
            AppError::external_service("OpenAI", format!("Failed to send request: {e}"))
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: Self::convert_messages(&request.messages),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_mode.then(ResponseFormat::json_object),
        };

        debug!(
            model,
            messages = openai_request.messages.len(),
            json_mode = request.json_mode,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::external_service("OpenAI", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse API response: {} - body: {}",
                e,
                &body[..body.len().min(500)]
            );
            AppError::external_service("OpenAI", format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service("OpenAI", "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        debug!(
            content_len = content.len(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion"
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        let response = self
            .client
            .get(self.api_url("models"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn test_config(base_url: &str) -> LlmServiceConfig {
        LlmServiceConfig {
            api_key: Some("sk-test".to_owned()),
            base_url: base_url.to_owned(),
            model: "gpt-4o".to_owned(),
            temperature: 0.8,
        }
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let mut config = test_config("https://api.openai.com/v1");
        config.api_key = None;
        let err = OpenAiProvider::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
    }

    #[test]
    fn test_api_url_handles_trailing_slash() {
        let provider = OpenAiProvider::from_config(&test_config("http://localhost:1234/v1/")).unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn test_json_mode_sets_response_format() {
        let request = OpenAiRequest {
            model: "gpt-4o".to_owned(),
            messages: vec![],
            temperature: Some(0.8),
            max_tokens: None,
            response_format: Some(ResponseFormat::json_object()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_response_format_omitted_without_json_mode() {
        let request = OpenAiRequest {
            model: "gpt-4o".to_owned(),
            messages: vec![],
            temperature: None,
            max_tokens: None,
            response_format: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn test_error_mapping_auth_and_rate_limit() {
        let body = r#"{"error": {"message": "bad key", "type": "invalid_request_error"}}"#;
        let err =
            OpenAiProvider::parse_error_response(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.code, ErrorCode::ExternalAuthFailed);

        let body = r#"{"error": {"message": "slow down", "type": "rate_limit_error"}}"#;
        let err =
            OpenAiProvider::parse_error_response(reqwest::StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    }

    #[test]
    fn test_error_mapping_non_json_gateway_body() {
        let err = OpenAiProvider::parse_error_response(
            reqwest::StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>",
        );
        assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    }

    #[test]
    fn test_completion_response_deserializes() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "{\"ok\": true}"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 100, "completion_tokens": 20, "total_tokens": 120}
        }"#;
        let parsed: OpenAiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("{\"ok\": true}")
        );
        assert_eq!(parsed.usage.unwrap().total, 120);
    }
}
