// ABOUTME: AI coach message model shared by the backend routes and the API client
// ABOUTME: Message type and urgency enums with their upper-case wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of coach message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoachMessageType {
    /// Something needs attention
    Alert,
    /// Informational
    Info,
    /// Suggested action
    Recommendation,
    /// Positive reinforcement
    Praise,
    /// Motivational nudge
    Motivation,
    /// Cautionary note
    Warning,
    /// Error surfaced to the user
    Error,
}

/// How urgently a message should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Urgency {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

/// A message from the AI coach to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AICoachMessage {
    /// Message id
    pub id: String,
    /// Recipient
    pub user_id: String,
    /// Optional headline
    #[serde(default)]
    pub title: Option<String>,
    /// Message body
    pub body: String,
    /// Message kind
    pub message_type: CoachMessageType,
    /// Urgency
    pub urgency: Urgency,
    /// Optional in-app link
    #[serde(default)]
    pub deep_link: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Read time, if read
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

impl AICoachMessage {
    /// Whether the message has not been read yet
    #[must_use]
    pub const fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }

    /// Same message, read at `at`
    #[must_use]
    pub fn marked_read(mut self, at: DateTime<Utc>) -> Self {
        self.read_at = Some(at);
        self
    }
}
