// ABOUTME: Typed HTTP client for the NGX Pulse backend
// ABOUTME: Health check, AI coach messages, and program generation with error logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! # Backend API client
//!
//! [`BrainClient`] wraps the endpoints the frontend consumes. Every request
//! carries an `X-Trace-ID` header; failures are returned as [`AppError`] with
//! the status mapped to an [`ErrorCode`](crate::errors::ErrorCode) and are
//! recorded in a bounded [`ErrorLog`].
//!
//! When built with an auth provider, the session token is attached as a bearer
//! token and a 401 or 419 response signs the session out.

/// Bounded error log and status-to-message mapping
pub mod error_log;
/// Shared reqwest clients
pub mod http_client;

use crate::auth::AuthProvider;
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use chrono::Utc;
use error_log::{ErrorLog, ErrorLogEntry, NETWORK_ERROR_MESSAGE, PARSE_ERROR_MESSAGE};
use pulse_core::models::{
    AICoachMessage, AIGeneratedProgram, GenerateProgramRequest, GenerateProgramResponse,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Header carrying the per-request trace id
pub const TRACE_ID_HEADER: &str = "X-Trace-ID";

/// Client for the NGX Pulse backend
pub struct BrainClient {
    http: Client,
    base_url: String,
    bearer_token: Option<String>,
    auth: Option<Arc<dyn AuthProvider>>,
    error_log: ErrorLog,
}

impl BrainClient {
    /// Client for the backend at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: http_client::shared_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            bearer_token: None,
            auth: None,
            error_log: ErrorLog::default(),
        }
    }

    /// Send a fixed bearer token with every request
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Take the bearer token from `provider`'s session and sign out on expiry
    #[must_use]
    pub fn with_auth(mut self, provider: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(provider);
        self
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Failed calls recorded by this client
    #[must_use]
    pub const fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    /// `GET /_healthz`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or unhealthy
    pub async fn handle_healthz(&self) -> AppResult<Value> {
        self.send(Method::GET, endpoints::HEALTHZ, None::<&()>).await
    }

    /// `GET /routes/ai-coach-messages/`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a message list
    pub async fn get_ai_coach_messages(&self) -> AppResult<Vec<AICoachMessage>> {
        self.send(Method::GET, endpoints::AI_COACH_MESSAGES, None::<&()>)
            .await
    }

    /// `POST /routes/ai/generate-program`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a failed generation
    pub async fn generate_program(
        &self,
        request: &GenerateProgramRequest,
    ) -> AppResult<AIGeneratedProgram> {
        let response: GenerateProgramResponse = self
            .send(Method::POST, endpoints::GENERATE_PROGRAM, Some(request))
            .await?;
        match response {
            GenerateProgramResponse {
                success: true,
                data: Some(program),
                ..
            } => Ok(program),
            GenerateProgramResponse { error, .. } => Err(AppError::external_service(
                "program generation",
                error.unwrap_or_else(|| "no program returned".to_owned()),
            )),
        }
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.bearer_token {
            return request.bearer_auth(token);
        }
        let Some(auth) = &self.auth else {
            return request;
        };
        match auth.get_session().await {
            Ok(Some(session)) => request.bearer_auth(session.access_token),
            Ok(None) => request,
            Err(e) => {
                warn!(error = %e, "Could not read session for API call");
                request
            }
        }
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> AppResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let trace_id = error_log::generate_trace_id();
        let started = Instant::now();

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(TRACE_ID_HEADER, &trace_id);
        if let Some(body) = body {
            request = request.json(body);
        }
        request = self.authorize(request).await;

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.record(&method, &url, None, e.to_string(), &trace_id);
                return Err(AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    NETWORK_ERROR_MESSAGE,
                )
                .with_request_id(trace_id)
                .with_source(e));
            }
        };

        let status = response.status().as_u16();
        AppLogger::log_api_call(
            method.as_str(),
            &url,
            status,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                self.record(&method, &url, Some(status), e.to_string(), &trace_id);
                return Err(AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    NETWORK_ERROR_MESSAGE,
                )
                .with_request_id(trace_id)
                .with_source(e));
            }
        };
        if !(200..300).contains(&status) {
            let server_message = server_message(&text);
            self.record(
                &method,
                &url,
                Some(status),
                server_message
                    .clone()
                    .unwrap_or_else(|| format!("HTTP {status}")),
                &trace_id,
            );
            if matches!(status, 401 | 419) {
                self.sign_out_expired_session(status).await;
            }
            return Err(error_log::status_error(
                status,
                server_message.as_deref(),
                &trace_id,
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            self.record(&method, &url, Some(status), PARSE_ERROR_MESSAGE.to_owned(), &trace_id);
            AppError::serialization(PARSE_ERROR_MESSAGE)
                .with_request_id(trace_id.clone())
                .with_source(e)
        })
    }

    async fn sign_out_expired_session(&self, status: u16) {
        let Some(auth) = &self.auth else {
            return;
        };
        warn!(status, "Auto-logout triggered by expired session");
        if let Err(e) = auth.sign_out().await {
            warn!(error = %e, "Failed to auto-logout");
        }
    }

    fn record(&self, method: &Method, url: &str, status: Option<u16>, error: String, trace_id: &str) {
        debug!(%trace_id, ?status, %error, "API call failed");
        self.error_log.record(ErrorLogEntry {
            timestamp: Utc::now(),
            method: method.as_str().to_owned(),
            url: url.to_owned(),
            status,
            error,
            trace_id: trace_id.to_owned(),
        });
    }
}

/// Message from an error body: `message`, `error` (string or `{message}`), or `detail`
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            value.get("error").and_then(|error| {
                error
                    .as_str()
                    .or_else(|| error.get("message").and_then(Value::as_str))
            })
        })
        .or_else(|| value.get("detail").and_then(Value::as_str))
        .map(str::to_owned)
}
