// ABOUTME: Auth provider factory for configuration-based backend selection
// ABOUTME: Builds the demo or Supabase provider over a shared key-value store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use super::{AuthProvider, DemoAuthProvider, SupabaseAuthProvider};
use crate::config::{AuthConfig, AuthProviderKind};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Build the configured provider
///
/// # Errors
///
/// Returns `ConfigInvalid` when Supabase is selected without credentials
pub fn create_auth_provider(
    config: &AuthConfig,
    store: Arc<dyn KeyValueStore>,
) -> AppResult<Arc<dyn AuthProvider>> {
    let provider: Arc<dyn AuthProvider> = match config.provider {
        AuthProviderKind::Demo if config.demo_delays => Arc::new(DemoAuthProvider::new(store)),
        AuthProviderKind::Demo => Arc::new(DemoAuthProvider::without_delays(store)),
        AuthProviderKind::Supabase => {
            let supabase = config.supabase.as_ref().ok_or_else(|| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    "Supabase auth selected without SUPABASE_URL and SUPABASE_ANON_KEY",
                )
            })?;
            Arc::new(SupabaseAuthProvider::new(supabase, store))
        }
    };
    info!("Initialized {} auth provider", provider.name());
    Ok(provider)
}
