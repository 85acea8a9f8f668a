// ABOUTME: Session and user models returned by the auth providers
// ABOUTME: Serialized verbatim into browser-style storage under the session key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user as seen by the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned id
    pub id: String,
    /// Email address
    pub email: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// A signed-in session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Session owner
    pub user: AuthUser,
    /// Bearer token for API calls
    pub access_token: String,
}

/// Result of a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInData {
    /// Signed-in user
    pub user: AuthUser,
    /// New session
    pub session: AuthSession,
}

/// Result of a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpData {
    /// Registered user
    pub user: AuthUser,
    /// Session, when the provider signs the user in immediately
    #[serde(default)]
    pub session: Option<AuthSession>,
}

/// Auth state transitions delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    /// A session was created
    SignedIn,
    /// The session was destroyed
    SignedOut,
}

impl fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedIn => f.write_str("SIGNED_IN"),
            Self::SignedOut => f.write_str("SIGNED_OUT"),
        }
    }
}
