// ABOUTME: AI coach message catalog served to the dashboard
// ABOUTME: Mock messages for the placeholder user with timestamps relative to the request time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::coach_messages::{DASHBOARD_MESSAGE_LIMIT, MOCK_USER_ID};
use chrono::{DateTime, Duration, Utc};
use pulse_core::models::{AICoachMessage, CoachMessageType, Urgency};

/// Source of coach messages for a user
pub struct CoachMessageService {
    limit: usize,
}

impl Default for CoachMessageService {
    fn default() -> Self {
        Self {
            limit: DASHBOARD_MESSAGE_LIMIT,
        }
    }
}

impl CoachMessageService {
    /// Messages shown on the dashboard as of `now`.
    ///
    /// Until the route is wired to real auth every message belongs to the
    /// placeholder user.
    #[must_use]
    pub fn dashboard_messages(&self, now: DateTime<Utc>) -> Vec<AICoachMessage> {
        let mut messages = catalog(MOCK_USER_ID, now);
        messages.truncate(self.limit);
        messages
    }
}

fn message(
    id: &str,
    user_id: &str,
    title: Option<&str>,
    body: &str,
    kind: (CoachMessageType, Urgency),
    deep_link: Option<&str>,
    created_at: DateTime<Utc>,
) -> AICoachMessage {
    AICoachMessage {
        id: id.to_owned(),
        user_id: user_id.to_owned(),
        title: title.map(str::to_owned),
        body: body.to_owned(),
        message_type: kind.0,
        urgency: kind.1,
        deep_link: deep_link.map(str::to_owned),
        created_at,
        read_at: None,
    }
}

/// Full mock catalog in display order
#[must_use]
pub fn catalog(user_id: &str, now: DateTime<Utc>) -> Vec<AICoachMessage> {
    vec![
        message(
            "msg_001",
            user_id,
            Some("HRV Dip Detected"),
            "We've noticed a significant dip in your HRV over the past 2 days. Consider prioritizing rest and recovery. A light walk or meditation could be beneficial.",
            (CoachMessageType::Alert, Urgency::High),
            Some("/biometric-log-page?metric=hrv"),
            now - Duration::hours(2),
        ),
        message(
            "msg_002",
            user_id,
            Some("Consistent Sleep Schedule"),
            "Great job maintaining a consistent sleep schedule this week! This is key for recovery and cognitive function.",
            (CoachMessageType::Praise, Urgency::Low),
            None,
            now - Duration::days(1),
        )
        .marked_read(now - Duration::hours(5)),
        message(
            "msg_003",
            user_id,
            Some("Protein Intake Reminder"),
            "Remember to focus on your protein intake today to support muscle repair, especially after your strength session.",
            (CoachMessageType::Recommendation, Urgency::Medium),
            Some("/nutrition-log-page"),
            now - Duration::hours(1),
        ),
        message(
            "msg_004",
            user_id,
            None,
            "You've hit a new personal best on your squat! Keep up the fantastic work.",
            (CoachMessageType::Praise, Urgency::Medium),
            None,
            now - Duration::days(2) - Duration::hours(3),
        ),
        message(
            "msg_005",
            user_id,
            Some("Upcoming Check-in"),
            "Don't forget your scheduled check-in with your coach tomorrow at 10:00 AM.",
            (CoachMessageType::Info, Urgency::Medium),
            Some("/calendar-page"),
            now - Duration::hours(20),
        ),
    ]
}
