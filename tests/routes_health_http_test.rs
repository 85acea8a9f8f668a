// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Covers the client liveness endpoint, the system health route, and CORS headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use ngx_pulse::config::ServerConfig;

fn health_routes() -> axum::Router {
    ngx_pulse::routes::health::HealthRoutes::routes()
}

#[tokio::test]
async fn test_healthz_reports_healthy() {
    let response = AxumTestRequest::get("/_healthz").send(health_routes()).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_system_health_reports_ok() {
    let response = AxumTestRequest::get("/routes/system/health")
        .send(health_routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_full_router_allows_any_origin_by_default() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::get("/_healthz")
        .header("origin", "http://localhost:5173")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn test_full_router_restricts_configured_origins() {
    let config = ServerConfig {
        cors_allowed_origins: "https://pulse.ngx.ai".to_owned(),
        ..common::test_config()
    };

    let allowed = AxumTestRequest::options("/routes/ai/generate-program")
        .header("origin", "https://pulse.ngx.ai")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-trace-id")
        .send(common::test_router(config.clone()))
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin").as_deref(),
        Some("https://pulse.ngx.ai")
    );

    let denied = AxumTestRequest::get("/_healthz")
        .header("origin", "https://evil.example")
        .send(common::test_router(config))
        .await;
    assert!(denied.header("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_unknown_route_uses_error_body() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::get("/routes/unknown").send(app).await;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
