// ABOUTME: Plan generation logic: prompt construction and completion validation
// ABOUTME: Pure functions with no I/O; the HTTP layer wires them to the LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Plan generation: prompt construction and completion validation.
//!
//! Assembles the user's inputs and the fixed coaching rules document into the
//! instruction sent to the model, and validates the returned completion
//! against the expected plan shape. This module contains pure logic (no I/O
//! or network calls).

/// Prompt construction for plan generation
pub mod prompt;
/// Structural validation of model completions
pub mod schema;

pub use prompt::{build_plan_prompt, plano_system_prompt};
pub use schema::parse_plan_completion;
