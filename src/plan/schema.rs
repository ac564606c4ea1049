// ABOUTME: Structural validation of model completions against the plan schema
// ABOUTME: Distinguishes empty, malformed, and wrong-shape completions explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Completion validation boundary.
//!
//! The model is instructed to return a JSON object matching
//! [`GeneratedPlan`]; this module is where that contract is enforced. The
//! three failure modes are kept distinct so logs and tests can tell them
//! apart: an empty completion, text that is not JSON at all, and valid JSON
//! that does not have the plan shape.

use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::GeneratedPlan;

/// Parse and validate a model completion into a [`GeneratedPlan`].
///
/// # Errors
///
/// - `EmptyCompletion` when the text is empty or whitespace
/// - `MalformedCompletion` when the text is not valid JSON
/// - `SchemaMismatch` when the JSON does not match the plan shape
pub fn parse_plan_completion(completion: &str) -> AppResult<GeneratedPlan> {
    let trimmed = completion.trim();
    if trimmed.is_empty() {
        return Err(AppError::empty_completion());
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| {
        AppError::malformed_completion(format!("completion is not valid JSON: {e}")).with_source(e)
    })?;

    serde_json::from_value(value)
        .map_err(|e| AppError::schema_mismatch(format!("completion is not a valid plan: {e}")))
}
