// ABOUTME: System route reporting whether the caller's bearer token is valid
// ABOUTME: Resolves the caller through the server's token verifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::endpoints;
use crate::errors::AppResult;
use crate::server::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of a successful auth status check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    /// Always `authenticated`
    pub status: String,
    /// Id of the caller
    pub user_id: String,
}

/// System routes that need the shared resources
pub struct SystemRoutes;

impl SystemRoutes {
    /// Create the system routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::SYSTEM_AUTH_STATUS, get(Self::handle_auth_status))
            .with_state(resources)
    }

    async fn handle_auth_status(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> AppResult<Json<AuthStatusResponse>> {
        let user = resources.token_verifier.authorize(&headers).await?;
        Ok(Json(AuthStatusResponse {
            status: "authenticated".to_owned(),
            user_id: user.id,
        }))
    }
}
