// ABOUTME: Integration tests for the Supabase auth provider against a mock GoTrue server
// ABOUTME: Sign-in persistence, auth events, error mapping, sign-up variants, and logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use ngx_pulse::auth::{AuthProvider, SupabaseAuthProvider};
use ngx_pulse::config::SupabaseConfig;
use ngx_pulse::constants::storage_keys::AUTH_SESSION;
use ngx_pulse::errors::ErrorCode;
use ngx_pulse::models::{AuthEvent, AuthSession};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

const ANON_KEY: &str = "anon-test-key";

fn user(email: &str) -> Value {
    json!({
        "id": "8d0f6c1e-0000-4000-8000-000000000001",
        "email": email,
        "created_at": "2025-01-01T00:00:00Z"
    })
}

async fn token(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    assert_eq!(headers.get("apikey").unwrap(), ANON_KEY);
    assert_eq!(query.get("grant_type").map(String::as_str), Some("password"));
    if body["password"] == "correct" {
        Json(json!({
            "access_token": "jwt-access",
            "token_type": "bearer",
            "user": user(body["email"].as_str().unwrap())
        }))
        .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })),
        )
            .into_response()
    }
}

async fn signup(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap();
    if email.starts_with("confirm") {
        Json(user(email)).into_response()
    } else if email.starts_with("taken") {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "msg": "User already registered" })),
        )
            .into_response()
    } else {
        Json(json!({ "access_token": "jwt-new", "user": user(email) })).into_response()
    }
}

async fn spawn_gotrue(logouts: Arc<AtomicUsize>) -> String {
    let app = Router::new()
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/signup", post(signup))
        .route(
            "/auth/v1/logout",
            post(move |headers: HeaderMap| {
                let logouts = Arc::clone(&logouts);
                async move {
                    assert_eq!(headers.get("authorization").unwrap(), "Bearer jwt-access");
                    logouts.fetch_add(1, Ordering::SeqCst);
                    StatusCode::NO_CONTENT
                }
            }),
        );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn provider(url: String) -> (Arc<dyn ngx_pulse::storage::KeyValueStore>, SupabaseAuthProvider) {
    let store = common::memory_store();
    let config = SupabaseConfig {
        url,
        anon_key: ANON_KEY.to_owned(),
    };
    (Arc::clone(&store), SupabaseAuthProvider::new(&config, store))
}

#[tokio::test]
async fn test_sign_in_persists_session_and_emits_events() {
    let logouts = Arc::new(AtomicUsize::new(0));
    let (store, auth) = provider(spawn_gotrue(Arc::clone(&logouts)).await);

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let subscription = auth.on_auth_state_change(Arc::new(move |event: AuthEvent, session: Option<&AuthSession>| {
        sink.lock()
            .unwrap()
            .push((event, session.map(|s| s.access_token.clone())));
    }));

    let data = auth
        .sign_in_with_password("ana@ngx.ai", "correct")
        .await
        .unwrap();
    assert_eq!(data.session.access_token, "jwt-access");
    assert_eq!(data.user.email, "ana@ngx.ai");
    assert!(store.get_item(AUTH_SESSION).unwrap().is_some());
    assert_eq!(auth.get_session().await.unwrap(), Some(data.session));

    auth.sign_out().await.unwrap();
    assert_eq!(logouts.load(Ordering::SeqCst), 1);
    assert!(auth.get_session().await.unwrap().is_none());

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            (AuthEvent::SignedIn, Some("jwt-access".to_owned())),
            (AuthEvent::SignedOut, None)
        ]
    );

    subscription.unsubscribe();
    auth.sign_in_with_password("ana@ngx.ai", "correct")
        .await
        .unwrap();
    assert_eq!(events.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_bad_credentials_map_to_auth_invalid() {
    let (store, auth) = provider(spawn_gotrue(Arc::new(AtomicUsize::new(0))).await);

    let err = auth
        .sign_in_with_password("ana@ngx.ai", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
    assert_eq!(err.message, "Invalid login credentials");
    assert!(store.get_item(AUTH_SESSION).unwrap().is_none());
}

#[tokio::test]
async fn test_sign_up_variants() {
    let (_store, auth) = provider(spawn_gotrue(Arc::new(AtomicUsize::new(0))).await);

    let immediate = auth.sign_up("new@ngx.ai", "secret1").await.unwrap();
    assert_eq!(immediate.session.unwrap().access_token, "jwt-new");

    let pending = auth.sign_up("confirm@ngx.ai", "secret1").await.unwrap();
    assert!(pending.session.is_none());
    assert_eq!(pending.user.email, "confirm@ngx.ai");

    let err = auth.sign_up("taken@ngx.ai", "secret1").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
    assert_eq!(err.message, "User already registered");
}

#[tokio::test]
async fn test_unreachable_project_is_external_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (_store, auth) = provider(format!("http://{addr}"));
    let err = auth
        .sign_in_with_password("ana@ngx.ai", "correct")
        .await
        .unwrap_err();
    assert_ne!(err.code, ErrorCode::AuthInvalid);
}
