// ABOUTME: AI coach message routes for the dashboard
// ABOUTME: Lists the latest coach messages for the current user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::endpoints;
use crate::server::ServerResources;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use pulse_core::models::AICoachMessage;
use std::sync::Arc;

/// Coach message routes
pub struct CoachMessageRoutes;

impl CoachMessageRoutes {
    /// Create coach message routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::AI_COACH_MESSAGES, get(Self::handle_list))
            .with_state(resources)
    }

    async fn handle_list(State(resources): State<Arc<ServerResources>>) -> Json<Vec<AICoachMessage>> {
        Json(resources.coach_messages.dashboard_messages(Utc::now()))
    }
}
