// ABOUTME: Integration tests for the typed backend client against a live local server
// ABOUTME: Success paths, status-to-error mapping, error log entries, and auto sign-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::{HeaderMap, StatusCode};
use axum::{routing::get, Json, Router};
use ngx_pulse::auth::{AuthProvider, DemoAuthProvider};
use ngx_pulse::client::BrainClient;
use ngx_pulse::errors::ErrorCode;
use ngx_pulse::models::{GenerateProgramRequest, GoalCategory, ProgramGoal, ProgramTrack, UserProfile};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

async fn spawn_router(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_healthz_and_messages_against_server() {
    let (base_url, _server) = common::spawn_server(common::test_config()).await;
    let client = BrainClient::new(format!("{base_url}/"));

    let health = client.handle_healthz().await.unwrap();
    assert_eq!(health["status"], "healthy");

    let messages = client.get_ai_coach_messages().await.unwrap();
    assert_eq!(messages.len(), 3);
    assert!(client.error_log().entries().is_empty());
}

#[tokio::test]
async fn test_generate_program_against_server() {
    let (base_url, _server) = common::spawn_server(common::test_config()).await;
    let client = BrainClient::new(base_url);

    let request = GenerateProgramRequest {
        program_type: ProgramTrack::Nutrition,
        goals: vec![ProgramGoal::new(
            "blood_sugar",
            "Controlar glucosa",
            GoalCategory::Nutrition,
        )],
        preferences: BTreeMap::from([("diet_approach".to_owned(), "mediterránea".to_owned())]),
        user_profile: UserProfile::default(),
        user_id: "user-9".to_owned(),
    };
    let program = client.generate_program(&request).await.unwrap();
    assert_eq!(program.program_type.as_str(), "NUTRITION");
    assert!(program.ai_rationale.contains("mediterránea"));

    let failed = client
        .generate_program(&GenerateProgramRequest {
            user_id: String::new(),
            ..request
        })
        .await
        .unwrap_err();
    assert_eq!(failed.code, ErrorCode::InvalidInput);
    assert_eq!(failed.message, "user_id is required");
}

#[tokio::test]
async fn test_missing_route_maps_to_not_found_and_is_logged() {
    let app = Router::new().route(
        "/routes/ai-coach-messages/",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))) }),
    );
    let client = BrainClient::new(spawn_router(app).await);

    let err = client.get_ai_coach_messages().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.message, "El recurso solicitado no fue encontrado.");

    let entries = client.error_log().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, Some(404));
    assert_eq!(entries[0].error, "Not Found");
    assert_eq!(err.request_id.as_deref(), Some(entries[0].trace_id.as_str()));
}

#[tokio::test]
async fn test_trace_id_header_is_sent() {
    let app = Router::new().route(
        "/_healthz",
        get(|headers: HeaderMap| async move {
            let trace = headers
                .get("x-trace-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            Json(json!({ "status": "healthy", "trace": trace }))
        }),
    );
    let client = BrainClient::new(spawn_router(app).await);

    let body = client.handle_healthz().await.unwrap();
    assert!(body["trace"].as_str().unwrap().starts_with("trace_"));
}

#[tokio::test]
async fn test_expired_session_signs_out() {
    let app = Router::new().route(
        "/routes/ai-coach-messages/",
        get(|headers: HeaderMap| async move {
            let bearer = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            assert!(bearer.starts_with("Bearer demo-token-"));
            (StatusCode::UNAUTHORIZED, Json(json!({ "message": "expired" })))
        }),
    );
    let auth = Arc::new(DemoAuthProvider::without_delays(common::memory_store()));
    auth.sign_in_with_password("ana@ngx.ai", "secret")
        .await
        .unwrap();

    let client = BrainClient::new(spawn_router(app).await).with_auth(auth.clone());
    let err = client.get_ai_coach_messages().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::AuthExpired);
    assert!(err.message.starts_with("Tu sesión ha expirado"));
    assert!(auth.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_errors_and_bad_requests() {
    let app = Router::new()
        .route(
            "/_healthz",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        )
        .route(
            "/routes/ai-coach-messages/",
            get(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": { "message": "Edad inválida" } })),
                )
            }),
        );
    let client = BrainClient::new(spawn_router(app).await).with_bearer_token("fixed");

    let err = client.handle_healthz().await.unwrap_err();
    assert_eq!(err.message, "Error del servidor. El equipo técnico ha sido notificado.");

    let err = client.get_ai_coach_messages().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.message, "Edad inválida");
    assert_eq!(client.error_log().entries().len(), 2);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BrainClient::new(format!("http://{addr}"));
    let err = client.handle_healthz().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(client.error_log().entries()[0].status, None);
}

#[tokio::test]
async fn test_truncated_body_is_network_error_not_parse_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0_u8; 1024];
        let _ = socket.read(&mut request).await.unwrap();
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"sta",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = BrainClient::new(format!("http://{addr}"));
    let err = client.handle_healthz().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    let entries = client.error_log().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, Some(200));
}
