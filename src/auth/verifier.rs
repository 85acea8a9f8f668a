// ABOUTME: Server-side bearer token verification for authenticated routes
// ABOUTME: Staging demo user, Supabase GoTrue user lookup, or a configuration error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::client::http_client;
use crate::config::ServerConfig;
use crate::constants::staging_user;
use crate::errors::{AppError, AppResult, ErrorCode};
use http::{header::AUTHORIZATION, HeaderMap};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SERVICE_NAME: &str = "Supabase Auth";
const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Caller identity resolved from a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedUser {
    /// Subject id
    pub id: String,
    /// Email, when the identity provider reports one
    #[serde(default)]
    pub email: Option<String>,
}

/// How bearer tokens are checked
#[derive(Debug, Clone)]
pub enum TokenVerifier {
    /// Staging demo mode: every caller is the staging user
    Staging,
    /// Ask GoTrue who owns the token
    Supabase {
        /// HTTP client for the lookup
        client: Client,
        /// Project URL without trailing slash
        base_url: String,
        /// Public anonymous key
        anon_key: String,
    },
    /// No identity provider configured
    Unconfigured,
}

impl TokenVerifier {
    /// Verifier matching the server configuration
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        if config.demo.enabled {
            return Self::Staging;
        }
        config
            .auth
            .supabase
            .as_ref()
            .map_or(Self::Unconfigured, |supabase| Self::Supabase {
                client: http_client::auth_client(),
                base_url: supabase.url.trim_end_matches('/').to_owned(),
                anon_key: supabase.anon_key.clone(),
            })
    }

    /// Resolve the caller behind the request's `Authorization` header
    ///
    /// # Errors
    ///
    /// - `AuthRequired` when no bearer token is present
    /// - `AuthInvalid` when the identity provider rejects the token
    /// - `ConfigError` when no identity provider is configured
    pub async fn authorize(&self, headers: &HeaderMap) -> AppResult<AuthorizedUser> {
        match self {
            Self::Staging => Ok(AuthorizedUser {
                id: staging_user::ID.to_owned(),
                email: Some(staging_user::EMAIL.to_owned()),
            }),
            Self::Unconfigured => Err(AppError::config("Auth configuration missing")),
            Self::Supabase {
                client,
                base_url,
                anon_key,
            } => {
                let token = bearer_token(headers).ok_or_else(|| {
                    AppError::new(ErrorCode::AuthRequired, NOT_AUTHENTICATED)
                })?;
                let response = client
                    .get(format!("{base_url}/auth/v1/user"))
                    .header("apikey", anon_key)
                    .bearer_auth(token)
                    .send()
                    .await
                    .map_err(|e| {
                        AppError::external_service(SERVICE_NAME, e.to_string()).with_source(e)
                    })?;
                let status = response.status();
                if status.is_client_error() {
                    debug!(%status, "Bearer token rejected");
                    return Err(AppError::auth_invalid(NOT_AUTHENTICATED));
                }
                if !status.is_success() {
                    return Err(AppError::external_service(
                        SERVICE_NAME,
                        format!("user lookup failed with status {status}"),
                    ));
                }
                response.json::<AuthorizedUser>().await.map_err(|e| {
                    AppError::external_service(SERVICE_NAME, e.to_string()).with_source(e)
                })
            }
        }
    }
}

/// Token from `Authorization: Bearer <token>`; the scheme is case-insensitive
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DemoDataConfig, SupabaseConfig};
    use http::HeaderValue;

    fn headers(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(authorization).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_selection_from_config() {
        let staging = ServerConfig {
            demo: DemoDataConfig {
                enabled: true,
                data_path: None,
            },
            ..ServerConfig::default()
        };
        assert!(matches!(TokenVerifier::from_config(&staging), TokenVerifier::Staging));
        assert!(matches!(
            TokenVerifier::from_config(&ServerConfig::default()),
            TokenVerifier::Unconfigured
        ));

        let mut supabase = ServerConfig::default();
        supabase.auth.supabase = Some(SupabaseConfig {
            url: "https://project.supabase.co/".to_owned(),
            anon_key: "anon".to_owned(),
        });
        match TokenVerifier::from_config(&supabase) {
            TokenVerifier::Supabase { base_url, .. } => {
                assert_eq!(base_url, "https://project.supabase.co");
            }
            other => panic!("unexpected verifier {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_staging_ignores_token() {
        let user = TokenVerifier::Staging
            .authorize(&HeaderMap::new())
            .await
            .unwrap();
        assert_eq!(user.id, "demo-user-1");
    }

    #[tokio::test]
    async fn test_unconfigured_is_server_error() {
        let err = TokenVerifier::Unconfigured
            .authorize(&headers("Bearer abc"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.http_status(), 500);
    }

    #[tokio::test]
    async fn test_supabase_requires_token() {
        let verifier = TokenVerifier::Supabase {
            client: Client::new(),
            base_url: "http://127.0.0.1:9".to_owned(),
            anon_key: "anon".to_owned(),
        };
        let err = verifier.authorize(&HeaderMap::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
        assert_eq!(err.message, "Not authenticated");
    }
}
