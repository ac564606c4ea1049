// ABOUTME: Route module organization for the Plano fitness plan API HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers delegating to service logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Route module for the Plano Fitness API
//!
//! Routes are organized by domain. Each module contains route definitions
//! and thin handler functions; plan-generation logic lives in `crate::plan`.

/// Health check and readiness routes
pub mod health;
/// Plan generation routes
pub mod plans;
/// Static client page routes
pub mod ui;

/// Health check route handlers
pub use health::HealthRoutes;
/// Plan generation route handlers
pub use plans::PlanRoutes;
/// Client page route handlers
pub use ui::UiRoutes;
