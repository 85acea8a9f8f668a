// ABOUTME: Supabase GoTrue authentication provider over its REST API
// ABOUTME: Password sign-in, sign-up, and logout with the session kept in key-value storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use super::{AuthProvider, AuthStateCallback, ListenerRegistry, Subscription};
use crate::client::http_client;
use crate::config::SupabaseConfig;
use crate::constants::storage_keys::AUTH_SESSION;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pulse_core::models::{AuthEvent, AuthSession, AuthUser, SignInData, SignUpData};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

const PROVIDER_NAME: &str = "supabase";
const SERVICE_NAME: &str = "Supabase Auth";

/// User object returned by GoTrue
#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<GoTrueUser> for AuthUser {
    fn from(user: GoTrueUser) -> Self {
        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
            created_at: user.created_at,
        }
    }
}

/// Token grant response
#[derive(Debug, Deserialize)]
struct GoTrueSession {
    access_token: String,
    user: GoTrueUser,
}

impl From<GoTrueSession> for AuthSession {
    fn from(session: GoTrueSession) -> Self {
        Self {
            user: session.user.into(),
            access_token: session.access_token,
        }
    }
}

/// Sign-up answers with a session when confirmation is off, a bare user otherwise
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(GoTrueSession),
    User(GoTrueUser),
}

/// GoTrue error body; the field carrying the message varies by endpoint
#[derive(Debug, Default, Deserialize)]
struct GoTrueError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl GoTrueError {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

/// Provider backed by a Supabase project
pub struct SupabaseAuthProvider {
    client: Client,
    base_url: String,
    anon_key: String,
    store: Arc<dyn KeyValueStore>,
    listeners: Arc<ListenerRegistry>,
}

impl SupabaseAuthProvider {
    /// Provider for the project described by `config`
    #[must_use]
    pub fn new(config: &SupabaseConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            client: http_client::auth_client(),
            base_url: config.url.trim_end_matches('/').to_owned(),
            anon_key: config.anon_key.clone(),
            store,
            listeners: ListenerRegistry::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    async fn post(&self, path: &str, body: serde_json::Value, bearer: Option<&str>) -> AppResult<Response> {
        let mut request = self
            .client
            .post(self.url(path))
            .header("apikey", &self.anon_key)
            .json(&body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        request
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()).with_source(e))
    }

    /// Turn a non-success response into an error carrying GoTrue's message
    async fn failure(response: Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<GoTrueError>()
            .await
            .unwrap_or_default()
            .into_message()
            .unwrap_or_else(|| format!("request failed with status {status}"));
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::auth_invalid(message)
            }
            _ => AppError::external_service(SERVICE_NAME, message),
        }
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<SignInData> {
        let response = self
            .post(
                "token?grant_type=password",
                json!({ "email": email, "password": password }),
                None,
            )
            .await?;
        if !response.status().is_success() {
            AppLogger::log_auth_event(PROVIDER_NAME, "sign_in", false, None);
            return Err(Self::failure(response).await);
        }

        let session: AuthSession = response
            .json::<GoTrueSession>()
            .await
            .map_err(|e| AppError::serialization(format!("Invalid token response: {e}")))?
            .into();
        self.store.set_json(AUTH_SESSION, &session)?;

        AppLogger::log_auth_event(PROVIDER_NAME, "sign_in", true, Some(&session.user.id));
        self.listeners.emit(AuthEvent::SignedIn, Some(&session));
        Ok(SignInData {
            user: session.user.clone(),
            session,
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> AppResult<SignUpData> {
        let response = self
            .post("signup", json!({ "email": email, "password": password }), None)
            .await?;
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let parsed = response
            .json::<SignUpResponse>()
            .await
            .map_err(|e| AppError::serialization(format!("Invalid sign-up response: {e}")))?;
        let data = match parsed {
            SignUpResponse::Session(session) => {
                let session: AuthSession = session.into();
                self.store.set_json(AUTH_SESSION, &session)?;
                self.listeners.emit(AuthEvent::SignedIn, Some(&session));
                SignUpData {
                    user: session.user.clone(),
                    session: Some(session),
                }
            }
            SignUpResponse::User(user) => {
                debug!("Sign-up pending email confirmation");
                SignUpData {
                    user: user.into(),
                    session: None,
                }
            }
        };

        AppLogger::log_auth_event(PROVIDER_NAME, "sign_up", true, Some(&data.user.id));
        Ok(data)
    }

    async fn get_session(&self) -> AppResult<Option<AuthSession>> {
        self.store.get_json::<AuthSession>(AUTH_SESSION)
    }

    async fn sign_out(&self) -> AppResult<()> {
        let session = self.store.get_json::<AuthSession>(AUTH_SESSION)?;
        if let Some(session) = &session {
            match self
                .post("logout", json!({}), Some(&session.access_token))
                .await
            {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => warn!(status = %response.status(), "Supabase logout rejected"),
                Err(e) => warn!(error = %e, "Supabase logout failed"),
            }
        }

        self.store.remove_item(AUTH_SESSION)?;
        AppLogger::log_auth_event(
            PROVIDER_NAME,
            "sign_out",
            true,
            session.as_ref().map(|s| s.user.id.as_str()),
        );
        self.listeners.emit(AuthEvent::SignedOut, None);
        Ok(())
    }

    fn on_auth_state_change(&self, callback: AuthStateCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }
}
