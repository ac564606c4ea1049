// ABOUTME: Integration tests for the plan generation, health, and client page routes
// ABOUTME: Drives the full router with a stub LLM provider substituted for the hosted API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use plano_server::config::environment::{
    DatabaseServicesConfig, LlmServiceConfig, LogLevel, ServerConfig,
};
use plano_server::errors::AppError;
use plano_server::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use plano_server::models::GeneratedPlan;
use plano_server::server::{self, ServerResources};

// ---------------------------------------------------------------------------
// Stub provider
// ---------------------------------------------------------------------------

/// What the stub should do when asked for a completion
enum StubReply {
    Content(String),
    Failure,
}

/// In-test replacement for the hosted completion API
struct StubProvider {
    reply: StubReply,
    healthy: bool,
    last_request: Mutex<Option<ChatRequest>>,
}

impl StubProvider {
    fn returning(content: impl Into<String>) -> Self {
        Self {
            reply: StubReply::Content(content.into()),
            healthy: true,
            last_request: Mutex::new(None),
        }
    }

    fn failing() -> Self {
        Self {
            reply: StubReply::Failure,
            healthy: false,
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            StubReply::Content(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "stub-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            StubReply::Failure => Err(AppError::external_service("stub", "backend unreachable")),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(self.healthy)
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        llm: LlmServiceConfig {
            api_key: Some("sk-test".to_owned()),
            base_url: "http://localhost:0/v1".to_owned(),
            model: "stub-model".to_owned(),
            temperature: 0.8,
        },
        database: DatabaseServicesConfig {
            url: None,
            anon_key: None,
        },
    }
}

fn test_router(provider: Arc<StubProvider>) -> Router {
    let resources = Arc::new(ServerResources::new(Arc::new(test_config()), provider));
    server::router(resources)
}

fn sample_plan_json() -> String {
    serde_json::json!({
        "workout": {
            "title": "Treino Intermediário de Emagrecimento",
            "description": "Musculação combinada com cardio para queima de gordura",
            "exercises": [
                {
                    "name": "Agachamento Livre",
                    "sets": "3-4",
                    "reps": "10-12",
                    "rest": "45-60s",
                    "execution": "Pés na largura dos ombros, desça controlado até as coxas ficarem paralelas ao chão"
                },
                {
                    "name": "Flexão de Braço",
                    "sets": "3",
                    "reps": "10-15",
                    "rest": "45s",
                    "execution": "Corpo alinhado, desça o peito até quase tocar o chão"
                }
            ],
            "metrics": {
                "frequency": "4x por semana",
                "duration": "50-60 min",
                "progression": "Aumente a carga 2-5kg a cada 2 semanas"
            },
            "tips": ["Aqueça 10 minutos antes do treino", "Priorize a execução correta"]
        },
        "diet": {
            "title": "Plano Alimentar Hipocalórico",
            "description": "Dieta com déficit calórico moderado",
            "dailyCalories": "1800-2000 calorias",
            "meals": [
                {
                    "name": "Café da Manhã",
                    "time": "7h-8h",
                    "foods": ["2 ovos mexidos", "1 fatia de pão integral", "1 fruta"]
                },
                {
                    "name": "Almoço",
                    "time": "12h-13h",
                    "foods": ["150g de frango grelhado", "Salada à vontade", "4 colheres de arroz integral"]
                }
            ],
            "tips": ["Evite carboidratos simples", "Beba 2-3L de água por dia"]
        }
    })
    .to_string()
}

async fn post_generate(app: Router, body: serde_json::Value) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/generate-plan")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1_048_576)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn generate_request() -> serde_json::Value {
    serde_json::json!({"age": 30, "level": "intermediario", "goal": "perder_gordura"})
}

// ---------------------------------------------------------------------------
// Plan generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_generate_plan_success_returns_validated_plan() {
    let provider = Arc::new(StubProvider::returning(sample_plan_json()));
    let resp = post_generate(test_router(provider), generate_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;

    // Schema conformance, not byte equality: the model output is
    // non-deterministic in production.
    let plan: GeneratedPlan = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(plan.workout.exercises.len(), 2);
    // Sequences come back in the order provided
    assert_eq!(plan.workout.exercises[0].name, "Agachamento Livre");
    assert_eq!(plan.workout.exercises[1].name, "Flexão de Braço");
    assert_eq!(plan.diet.meals[0].name, "Café da Manhã");
    assert_eq!(json["diet"]["dailyCalories"], "1800-2000 calorias");
}

#[tokio::test]
async fn test_generate_plan_sends_inputs_in_json_mode() {
    let provider = Arc::new(StubProvider::returning(sample_plan_json()));
    let resp = post_generate(test_router(provider.clone()), generate_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = provider.last_request.lock().unwrap().clone().unwrap();
    assert!(sent.json_mode);
    assert_eq!(sent.model.as_deref(), Some("stub-model"));
    assert_eq!(sent.temperature, Some(0.8));
    assert_eq!(sent.messages.len(), 2);
    let user_prompt = &sent.messages[1].content;
    assert!(user_prompt.contains("Idade: 30 anos"));
    assert!(user_prompt.contains("Nível: intermediario"));
    assert!(user_prompt.contains("Objetivo: perder_gordura"));
}

#[tokio::test]
async fn test_empty_completion_is_a_generic_error() {
    let provider = Arc::new(StubProvider::returning(""));
    let resp = post_generate(test_router(provider), generate_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!({"error": "Erro ao gerar plano personalizado"})
    );
}

#[tokio::test]
async fn test_malformed_completion_is_a_generic_error() {
    let provider = Arc::new(StubProvider::returning("Claro! Aqui está seu plano:"));
    let resp = post_generate(test_router(provider), generate_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Erro ao gerar plano personalizado");
}

#[tokio::test]
async fn test_wrong_shape_completion_is_a_generic_error() {
    // Valid JSON, but not a plan: the silent `{}` pass-through is gone
    let provider = Arc::new(StubProvider::returning("{}"));
    let resp = post_generate(test_router(provider), generate_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Erro ao gerar plano personalizado");
}

#[tokio::test]
async fn test_provider_failure_is_a_generic_error() {
    let provider = Arc::new(StubProvider::failing());
    let resp = post_generate(test_router(provider), generate_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Erro ao gerar plano personalizado");
}

#[tokio::test]
async fn test_missing_fields_pass_through_without_validation() {
    // No server-side input validation: an empty body still flows into the
    // prompt (as empty values) and the request proceeds.
    let provider = Arc::new(StubProvider::returning(sample_plan_json()));
    let resp = post_generate(test_router(provider.clone()), serde_json::json!({})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = provider.last_request.lock().unwrap().clone().unwrap();
    assert!(sent.messages[1].content.contains("Idade:  anos"));
}

#[tokio::test]
async fn test_age_accepts_string_or_number() {
    let provider = Arc::new(StubProvider::returning(sample_plan_json()));
    let body = serde_json::json!({"age": "42", "level": "avancado", "goal": "tonificar"});
    let resp = post_generate(test_router(provider.clone()), body).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = provider.last_request.lock().unwrap().clone().unwrap();
    assert!(sent.messages[1].content.contains("Idade: 42 anos"));
}

// ---------------------------------------------------------------------------
// Health and client page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_returns_ok() {
    let provider = Arc::new(StubProvider::returning(sample_plan_json()));
    let resp = get(test_router(provider), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "plano_server");
}

#[tokio::test]
async fn test_ready_reflects_provider_health() {
    let provider = Arc::new(StubProvider::returning(sample_plan_json()));
    let resp = get(test_router(provider), "/ready").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "ready");
    assert_eq!(json["llm_provider"], "stub");

    let resp = get(test_router(Arc::new(StubProvider::failing())), "/ready").await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn test_index_serves_the_client_page() {
    let provider = Arc::new(StubProvider::returning(sample_plan_json()));
    let resp = get(test_router(provider), "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get("content-type")
        .expect("should have content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));

    let bytes = axum::body::to_bytes(resp.into_body(), 1_048_576)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Seu Treino e Dieta Personalizados"));
    assert!(page.contains("/api/generate-plan"));
}
