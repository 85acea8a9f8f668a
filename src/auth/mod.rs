// ABOUTME: Authentication provider abstraction for the frontend session
// ABOUTME: Demo and Supabase providers behind one trait, plus auth state subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! # Authentication
//!
//! The frontend talks to exactly one [`AuthProvider`], chosen by
//! configuration through [`factory::create_auth_provider`]:
//!
//! - [`demo::DemoAuthProvider`] keeps a mock session in key-value storage and
//!   never contacts a server.
//! - [`supabase::SupabaseAuthProvider`] calls the Supabase GoTrue REST API.
//!
//! Both persist their session through an injected
//! [`KeyValueStore`](crate::storage::KeyValueStore).

/// Storage-backed mock provider
pub mod demo;
/// Provider selection from configuration
pub mod factory;
/// Supabase GoTrue provider
pub mod supabase;
/// Bearer token verification for server routes
pub mod verifier;

use crate::errors::AppResult;
use async_trait::async_trait;
use dashmap::DashMap;
use pulse_core::models::{AuthEvent, AuthSession, SignInData, SignUpData};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::debug;

pub use demo::DemoAuthProvider;
pub use factory::create_auth_provider;
pub use supabase::SupabaseAuthProvider;
pub use verifier::{AuthorizedUser, TokenVerifier};

/// Listener invoked on auth state transitions
pub type AuthStateCallback = Arc<dyn Fn(AuthEvent, Option<&AuthSession>) + Send + Sync>;

/// Authentication backend used by the frontend
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Provider name (e.g. "demo", "supabase")
    fn name(&self) -> &'static str;

    /// Sign in with email and password, creating a session
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<SignInData>;

    /// Register a new account
    async fn sign_up(&self, email: &str, password: &str) -> AppResult<SignUpData>;

    /// Current persisted session, if any
    async fn get_session(&self) -> AppResult<Option<AuthSession>>;

    /// Destroy the current session
    async fn sign_out(&self) -> AppResult<()>;

    /// Register a listener for sign-in and sign-out events
    fn on_auth_state_change(&self, callback: AuthStateCallback) -> Subscription;
}

/// Registered auth state listeners
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: DashMap<u64, AuthStateCallback>,
}

impl ListenerRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Add a listener and return its subscription handle
    pub fn subscribe(self: &Arc<Self>, callback: AuthStateCallback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.insert(id, callback);
        Subscription {
            id,
            registry: Some(Arc::downgrade(self)),
        }
    }

    /// Deliver `event` to every listener
    pub fn emit(&self, event: AuthEvent, session: Option<&AuthSession>) {
        // Snapshot first so a listener may unsubscribe from inside its callback
        let listeners: Vec<AuthStateCallback> = self
            .listeners
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        debug!(%event, listeners = listeners.len(), "Dispatching auth state change");
        for listener in listeners {
            listener(event, session);
        }
    }

    /// Number of active listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn remove(&self, id: u64) {
        self.listeners.remove(&id);
    }
}

/// Handle returned by [`AuthProvider::on_auth_state_change`]
#[must_use = "dropping a Subscription keeps the listener registered; call unsubscribe"]
pub struct Subscription {
    id: u64,
    registry: Option<Weak<ListenerRegistry>>,
}

impl Subscription {
    /// Subscription that is never notified
    pub const fn inert() -> Self {
        Self {
            id: 0,
            registry: None,
        }
    }

    /// Stop receiving events
    pub fn unsubscribe(self) {
        match self.registry.as_ref().and_then(Weak::upgrade) {
            Some(registry) => {
                registry.remove(self.id);
                debug!(subscription = self.id, "Auth listener removed");
            }
            None => debug!("Unsubscribed from auth state changes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pulse_core::models::AuthUser;
    use std::sync::atomic::AtomicUsize;

    fn session() -> AuthSession {
        AuthSession {
            user: AuthUser {
                id: "u1".to_owned(),
                email: "a@b.c".to_owned(),
                created_at: Utc::now(),
            },
            access_token: "t".to_owned(),
        }
    }

    #[test]
    fn test_emit_reaches_listeners_until_unsubscribed() {
        let registry = ListenerRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = registry.subscribe(Arc::new(move |event: AuthEvent, session: Option<&AuthSession>| {
            assert_eq!(event, AuthEvent::SignedIn);
            assert!(session.is_some());
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        registry.emit(AuthEvent::SignedIn, Some(&session()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        subscription.unsubscribe();
        assert!(registry.is_empty());
        registry.emit(AuthEvent::SignedIn, Some(&session()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_inert_subscription_unsubscribes_quietly() {
        Subscription::inert().unsubscribe();
    }
}
