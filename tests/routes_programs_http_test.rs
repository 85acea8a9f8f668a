// ABOUTME: HTTP integration tests for the program generation route
// ABOUTME: Checks the success envelope, failure envelope, and seeded reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use ngx_pulse::models::GenerateProgramResponse;
use serde_json::{json, Value};

const GENERATE_PATH: &str = "/routes/ai/generate-program";

fn fitness_request(user_id: &str) -> Value {
    json!({
        "program_type": "fitness",
        "goals": [
            { "id": "weight_loss", "label": "Perder peso", "category": "fitness" },
            { "id": "stress", "label": "Reducir estrés", "category": "wellness" }
        ],
        "preferences": { "workout_frequency": "4 días", "workout_type": "fuerza" },
        "user_profile": { "experience_level": "beginner" },
        "user_id": user_id
    })
}

#[tokio::test]
async fn test_generates_prime_program() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::post(GENERATE_PATH)
        .json(&fitness_request("user-1"))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let envelope: GenerateProgramResponse = response.json();
    assert!(envelope.success);
    assert!(envelope.error.is_none());

    let program = envelope.data.unwrap();
    assert_eq!(program.program_type.as_str(), "PRIME");
    assert_eq!(program.estimated_duration_weeks, 12);
    assert_eq!(program.weekly_structure.len(), 8);
    assert!(program.success_metrics.len() <= 5);
    assert_eq!(program.goals.success_factors, ["Perder peso", "Reducir estrés"]);
}

#[tokio::test]
async fn test_same_seed_same_program() {
    let first: Value = AxumTestRequest::post(GENERATE_PATH)
        .json(&fitness_request("user-1"))
        .send(common::test_router(common::test_config()))
        .await
        .json();
    let second: Value = AxumTestRequest::post(GENERATE_PATH)
        .json(&fitness_request("user-1"))
        .send(common::test_router(common::test_config()))
        .await
        .json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_user_returns_failure_envelope() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::post(GENERATE_PATH)
        .json(&fitness_request(""))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "user_id is required");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_malformed_body_returns_failure_envelope() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::post(GENERATE_PATH)
        .raw_json(r#"{"program_type":"yoga"}"#)
        .send(app)
        .await;

    assert!(response.status() >= 400 && response.status() < 500);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}
