// ABOUTME: Storage-backed mock authentication provider for demos and local development
// ABOUTME: Simulates network latency and keeps the session under the demo_session key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use super::{AuthProvider, AuthStateCallback, Subscription};
use crate::constants::demo_auth::{
    MIN_SIGN_IN_PASSWORD_LEN, MIN_SIGN_UP_PASSWORD_LEN, TOKEN_PREFIX, USER_ID_PREFIX,
};
use crate::constants::demo_latency::{SIGN_IN_DELAY_MS, SIGN_UP_DELAY_MS};
use crate::constants::storage_keys::DEMO_SESSION;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use chrono::Utc;
use pulse_core::models::{AuthSession, AuthUser, SignInData, SignUpData};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::info;

/// User created by the demo provider
pub type DemoUser = AuthUser;
/// Session created by the demo provider
pub type DemoSession = AuthSession;

const PROVIDER_NAME: &str = "demo";

/// Mock provider that accepts any well-formed credentials
pub struct DemoAuthProvider {
    store: Arc<dyn KeyValueStore>,
    current: RwLock<Option<DemoSession>>,
    sign_in_delay: Duration,
    sign_up_delay: Duration,
}

impl DemoAuthProvider {
    /// Provider with the usual simulated latency
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
            sign_in_delay: Duration::from_millis(SIGN_IN_DELAY_MS),
            sign_up_delay: Duration::from_millis(SIGN_UP_DELAY_MS),
        }
    }

    /// Provider that answers immediately
    #[must_use]
    pub fn without_delays(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            sign_in_delay: Duration::ZERO,
            sign_up_delay: Duration::ZERO,
            ..Self::new(store)
        }
    }

    /// Session held in memory by this instance
    pub async fn current_session(&self) -> Option<DemoSession> {
        self.current.read().await.clone()
    }

    fn new_user(email: &str) -> DemoUser {
        let now = Utc::now();
        DemoUser {
            id: format!("{USER_ID_PREFIX}{}", now.timestamp_millis()),
            email: email.to_owned(),
            created_at: now,
        }
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}

fn check_email(email: &str) -> AppResult<()> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(AppError::auth_invalid("Email debe contener @"))
    }
}

#[async_trait]
impl AuthProvider for DemoAuthProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<SignInData> {
        simulate_latency(self.sign_in_delay).await;

        check_email(email)?;
        if password.chars().count() < MIN_SIGN_IN_PASSWORD_LEN {
            AppLogger::log_auth_event(PROVIDER_NAME, "sign_in", false, None);
            return Err(AppError::auth_invalid("Contraseña requerida"));
        }

        let user = Self::new_user(email);
        let session = DemoSession {
            access_token: format!("{TOKEN_PREFIX}{}", Utc::now().timestamp_millis()),
            user: user.clone(),
        };
        self.store.set_json(DEMO_SESSION, &session)?;
        *self.current.write().await = Some(session.clone());

        AppLogger::log_auth_event(PROVIDER_NAME, "sign_in", true, Some(&user.id));
        Ok(SignInData { user, session })
    }

    async fn sign_up(&self, email: &str, password: &str) -> AppResult<SignUpData> {
        simulate_latency(self.sign_up_delay).await;

        check_email(email).map_err(|e| AppError::invalid_input(e.message))?;
        if password.chars().count() < MIN_SIGN_UP_PASSWORD_LEN {
            return Err(AppError::invalid_input(
                "Contraseña debe tener al menos 6 caracteres",
            ));
        }

        let user = Self::new_user(email);
        AppLogger::log_auth_event(PROVIDER_NAME, "sign_up", true, Some(&user.id));
        Ok(SignUpData {
            user,
            session: None,
        })
    }

    async fn get_session(&self) -> AppResult<Option<AuthSession>> {
        let session = self.store.get_json::<DemoSession>(DEMO_SESSION)?;
        self.current.write().await.clone_from(&session);
        Ok(session)
    }

    async fn sign_out(&self) -> AppResult<()> {
        let previous = self.current.write().await.take();
        self.store.remove_item(DEMO_SESSION)?;
        AppLogger::log_auth_event(
            PROVIDER_NAME,
            "sign_out",
            true,
            previous.as_ref().map(|s| s.user.id.as_str()),
        );
        Ok(())
    }

    fn on_auth_state_change(&self, _callback: AuthStateCallback) -> Subscription {
        info!("Demo auth state listener registered; demo sessions never emit events");
        Subscription::inert()
    }
}
