// ABOUTME: HTTP integration tests for the security header and rate limit layers
// ABOUTME: Exercises the full router the way the server binary builds it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use ngx_pulse::config::ServerConfig;
use ngx_pulse::constants::rate_limits::BURST_LIMIT;
use serde_json::Value;

#[tokio::test]
async fn test_every_response_carries_security_headers() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::get("/_healthz").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("x-frame-options").as_deref(), Some("DENY"));
    assert_eq!(
        response.header("x-content-type-options").as_deref(),
        Some("nosniff")
    );
    assert_eq!(
        response.header("referrer-policy").as_deref(),
        Some("strict-origin-when-cross-origin")
    );
    assert!(response
        .header("content-security-policy")
        .unwrap()
        .contains("frame-ancestors 'none'"));
    assert!(response.header("strict-transport-security").is_none());
    assert!(response.header("x-api-version").is_none());
}

#[tokio::test]
async fn test_api_responses_echo_trace_id_and_hsts_behind_https_proxy() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::get("/routes/ai-coach-messages/")
        .header("x-trace-id", "trace_123_abc")
        .header("x-forwarded-proto", "https")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("x-api-version").as_deref(), Some("1.0"));
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("trace_123_abc")
    );
    assert!(response
        .header("strict-transport-security")
        .unwrap()
        .starts_with("max-age=31536000"));
}

#[tokio::test]
async fn test_error_responses_get_headers_too() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::get("/routes/missing").send(app).await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.header("x-frame-options").as_deref(), Some("DENY"));
    assert_eq!(response.header("x-request-id").as_deref(), Some("unknown"));
}

#[tokio::test]
async fn test_burst_limit_returns_429_with_retry_after() {
    let app = common::test_router(common::test_config());

    for remaining in (0..BURST_LIMIT).rev() {
        let response = AxumTestRequest::get("/_healthz").send(app.clone()).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.header("x-ratelimit-remaining"),
            Some(remaining.to_string())
        );
    }

    let limited = AxumTestRequest::get("/_healthz").send(app).await;
    assert_eq!(limited.status(), 429);
    assert_eq!(limited.header("retry-after").as_deref(), Some("60"));
    assert_eq!(limited.header("x-ratelimit-remaining").as_deref(), Some("0"));
    assert_eq!(limited.header("x-frame-options").as_deref(), Some("DENY"));
    let body: Value = limited.json();
    assert_eq!(body["error"]["code"], "RATE_LIMIT_EXCEEDED");
    assert_eq!(
        body["error"]["message"],
        "Rate limit exceeded for burst_protection"
    );
}

#[tokio::test]
async fn test_rate_limiting_can_be_disabled() {
    let app = common::test_router(ServerConfig {
        rate_limit_enabled: false,
        ..common::test_config()
    });

    for _ in 0..=BURST_LIMIT {
        let response = AxumTestRequest::get("/_healthz").send(app.clone()).await;
        assert_eq!(response.status(), 200);
        assert!(response.header("x-ratelimit-remaining").is_none());
    }
}
