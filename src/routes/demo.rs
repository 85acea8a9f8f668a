// ABOUTME: Staging demo dataset routes
// ABOUTME: Reports demo mode status and serves mock coach messages and health metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::endpoints;
use crate::server::ServerResources;
use crate::services::demo_dataset::DatasetCounts;
use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Demo status body
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoStatusResponse {
    /// Whether staging demo mode is on
    pub demo_mode: bool,
    /// Loaded record counts
    pub counts: DatasetCounts,
}

/// List body
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemsResponse {
    /// Records
    pub items: Vec<Value>,
}

/// Optional user filter
#[derive(Debug, Deserialize)]
pub struct UserFilter {
    /// Only records owned by this user
    pub user_id: Option<String>,
}

/// Demo dataset routes
pub struct DemoRoutes;

impl DemoRoutes {
    /// Create demo routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::DEMO_STATUS, get(Self::handle_status))
            .route(endpoints::DEMO_MESSAGES, get(Self::handle_messages))
            .route(endpoints::DEMO_HEALTH_METRICS, get(Self::handle_health_metrics))
            .with_state(resources)
    }

    async fn handle_status(State(resources): State<Arc<ServerResources>>) -> Json<DemoStatusResponse> {
        Json(DemoStatusResponse {
            demo_mode: resources.config.demo.enabled,
            counts: resources.demo_dataset.summary(),
        })
    }

    async fn handle_messages(
        State(resources): State<Arc<ServerResources>>,
        Query(filter): Query<UserFilter>,
    ) -> Json<ItemsResponse> {
        let items = match filter.user_id {
            Some(user_id) => resources.demo_dataset.for_user(&user_id).ai_coach_messages,
            None => resources.demo_dataset.ai_coach_messages.clone(),
        };
        Json(ItemsResponse { items })
    }

    async fn handle_health_metrics(
        State(resources): State<Arc<ServerResources>>,
        Query(filter): Query<UserFilter>,
    ) -> Json<ItemsResponse> {
        let items = match filter.user_id {
            Some(user_id) => resources.demo_dataset.for_user(&user_id).health_metrics,
            None => resources.demo_dataset.health_metrics.clone(),
        };
        Json(ItemsResponse { items })
    }
}
