// ABOUTME: HTTP integration tests for the AI coach message route
// ABOUTME: Verifies the dashboard listing shape, order, and relative timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use chrono::{Duration, Utc};
use helpers::axum_test::AxumTestRequest;
use ngx_pulse::models::{AICoachMessage, CoachMessageType, Urgency};

const MESSAGES_PATH: &str = "/routes/ai-coach-messages/";

#[tokio::test]
async fn test_lists_three_messages_for_mock_user() {
    let app = common::test_router(common::test_config());
    let response = AxumTestRequest::get(MESSAGES_PATH).send(app).await;

    assert_eq!(response.status(), 200);
    let messages: Vec<AICoachMessage> = response.json();
    assert_eq!(messages.len(), 3);
    assert!(messages
        .iter()
        .all(|m| m.user_id == "00000000-0000-0000-0000-000000000000"));

    assert_eq!(messages[0].id, "msg_001");
    assert_eq!(messages[0].message_type, CoachMessageType::Alert);
    assert_eq!(messages[0].urgency, Urgency::High);
    assert_eq!(
        messages[0].deep_link.as_deref(),
        Some("/biometric-log-page?metric=hrv")
    );
}

#[tokio::test]
async fn test_timestamps_are_recent() {
    let before = Utc::now();
    let app = common::test_router(common::test_config());
    let messages: Vec<AICoachMessage> = AxumTestRequest::get(MESSAGES_PATH).send(app).await.json();
    let after = Utc::now();

    let first = &messages[0];
    assert!(first.created_at >= before - Duration::hours(2) - Duration::seconds(1));
    assert!(first.created_at <= after - Duration::hours(2));

    let praise = &messages[1];
    assert!(praise.read_at.is_some());
    assert!(messages[2].read_at.is_none());
}

#[tokio::test]
async fn test_wire_format_uses_uppercase_enums() {
    let app = common::test_router(common::test_config());
    let body: serde_json::Value = AxumTestRequest::get(MESSAGES_PATH).send(app).await.json();

    assert_eq!(body[0]["message_type"], "ALERT");
    assert_eq!(body[1]["message_type"], "PRAISE");
    assert_eq!(body[2]["urgency"], "MEDIUM");
    assert!(body[1]["deep_link"].is_null());
}
