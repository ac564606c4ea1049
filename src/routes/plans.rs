// ABOUTME: Plan generation route handler for the Plano fitness plan API
// ABOUTME: POSTs user inputs through the prompt formatter, LLM provider, and completion validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Plan generation routes
//!
//! One operation: `POST /api/generate-plan`. The handler interpolates the
//! user's inputs into the plan prompt, issues a single JSON-mode completion,
//! validates the result, and returns it. Every failure on the generation
//! path is logged with its specific error code and collapsed to a generic
//! 500 body at this boundary; no internal detail reaches the client.

use crate::{
    errors::AppError,
    llm::{ChatMessage, ChatRequest},
    models::{AgeValue, GeneratedPlan},
    plan::{build_plan_prompt, parse_plan_completion, plano_system_prompt},
    server::ServerResources,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Client-facing message for any plan generation failure
const GENERIC_PLAN_ERROR: &str = "Erro ao gerar plano personalizado";

// ============================================================================
// Request Types
// ============================================================================

/// Request to generate a plan.
///
/// Fields are optional on purpose: inputs are not validated server-side, and
/// whatever arrives (including nothing) is carried into the prompt verbatim.
#[derive(Debug, Default, Deserialize)]
pub struct GeneratePlanRequest {
    /// User age, as string or number
    #[serde(default)]
    pub age: Option<AgeValue>,
    /// Training level token, e.g. `"intermediario"`
    #[serde(default)]
    pub level: Option<String>,
    /// Fitness goal token, e.g. `"perder_gordura"`
    #[serde(default)]
    pub goal: Option<String>,
}

// ============================================================================
// Plan Routes
// ============================================================================

/// Plan generation routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan generation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate-plan", post(Self::generate_plan))
            .with_state(resources)
    }

    /// `POST /api/generate-plan` handler
    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GeneratePlanRequest>,
    ) -> Result<Response, AppError> {
        match Self::generate(&resources, &request).await {
            Ok(plan) => Ok((StatusCode::OK, Json(plan)).into_response()),
            Err(err) => {
                error!(code = ?err.code, "Plan generation failed: {err}");
                // Only the generic message crosses the trust boundary
                Err(AppError::internal(GENERIC_PLAN_ERROR))
            }
        }
    }

    /// Run the full generation pipeline for one request
    async fn generate(
        resources: &Arc<ServerResources>,
        request: &GeneratePlanRequest,
    ) -> Result<GeneratedPlan, AppError> {
        let age = request
            .age
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let level = request.level.clone().unwrap_or_default();
        let goal = request.goal.clone().unwrap_or_default();

        info!(%age, %level, %goal, "Generating personalized plan");

        let prompt = build_plan_prompt(&age, &level, &goal);
        let chat_request = ChatRequest::new(vec![
            ChatMessage::system(plano_system_prompt()),
            ChatMessage::user(prompt),
        ])
        .with_model(resources.config.llm.model.clone())
        .with_temperature(resources.config.llm.temperature)
        .with_json_mode();

        let response = resources.llm.complete(&chat_request).await?;
        let plan = parse_plan_completion(&response.content)?;

        info!(
            exercises = plan.workout.exercises.len(),
            meals = plan.diet.meals.len(),
            "Plan generated"
        );
        Ok(plan)
    }
}
