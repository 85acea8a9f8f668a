// ABOUTME: Program generation route returning the success/error envelope
// ABOUTME: Failures keep the envelope shape with the status taken from the error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::endpoints;
use crate::server::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use http::StatusCode;
use pulse_core::models::{GenerateProgramRequest, GenerateProgramResponse};
use std::sync::Arc;
use tracing::warn;

/// Program generation routes
pub struct ProgramRoutes;

impl ProgramRoutes {
    /// Create program routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::GENERATE_PROGRAM, post(Self::handle_generate))
            .with_state(resources)
    }

    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<GenerateProgramRequest>, JsonRejection>,
    ) -> Response {
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "Rejected program request");
                return (
                    rejection.status(),
                    Json(GenerateProgramResponse::failed(rejection.body_text())),
                )
                    .into_response();
            }
        };

        match resources.programs.generate(&request).await {
            Ok(program) => Json(GenerateProgramResponse::ok(program)).into_response(),
            Err(e) => {
                let status = StatusCode::from_u16(e.http_status())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(GenerateProgramResponse::failed(e.message))).into_response()
            }
        }
    }
}
