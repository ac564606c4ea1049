// ABOUTME: Static client page route for the Plano fitness plan API
// ABOUTME: Serves the embedded form/results single-page client at the root path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Client page route
//!
//! The form/view client is a single static page embedded at compile time and
//! served at `/`. It drives `POST /api/generate-plan` and renders the
//! returned plan as Treino/Dieta tabs.

use axum::{response::Html, routing::get, Router};

/// The embedded client page
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Client page routes implementation
pub struct UiRoutes;

impl UiRoutes {
    /// Create the client page routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/", get(Self::index_handler))
    }

    async fn index_handler() -> Html<&'static str> {
        Html(INDEX_HTML)
    }
}
