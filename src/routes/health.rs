// ABOUTME: Health check route handlers for liveness checks
// ABOUTME: Serves the generated client's /_healthz and the system health endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Health check routes

use crate::constants::endpoints;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route(endpoints::HEALTHZ, get(Self::handle_healthz))
            .route(endpoints::SYSTEM_HEALTH, get(Self::handle_system_health))
    }

    async fn handle_healthz() -> Json<Value> {
        Json(json!({ "status": "healthy" }))
    }

    async fn handle_system_health() -> Json<Value> {
        Json(json!({ "status": "ok" }))
    }
}
