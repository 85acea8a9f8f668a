// ABOUTME: Sliding-window rate limiting for HTTP requests
// ABOUTME: Per-client rules by path prefix with standard rate limit headers and 429 responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! # Rate Limiting
//!
//! Each [`RateLimitRule`] counts requests per key inside a sliding window.
//! The key is the client address for [`RateLimitScope::Client`] rules and
//! the bearer token for [`RateLimitScope::Caller`] rules. A request is
//! rejected by the first applicable rule whose window is full; rejected
//! requests are not counted. Accepted requests are counted against every
//! applicable rule and report the smallest remaining allowance.

use crate::auth::verifier::bearer_token;
use crate::constants::rate_limits::{
    AI_LIMIT, AI_WINDOW_SECS, API_GLOBAL_LIMIT, API_GLOBAL_WINDOW_SECS, AUTH_LIMIT,
    AUTH_WINDOW_SECS, BURST_LIMIT, BURST_WINDOW_SECS, SWEEP_INTERVAL_SECS, UNLIMITED_REMAINING,
};
use crate::errors::AppError;
use crate::server::ServerResources;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use dashmap::DashMap;
use http::{HeaderMap, HeaderValue, Method};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::warn;

/// HTTP header names for rate limiting, lowercase as stored in a `HeaderMap`
pub mod headers {
    /// Maximum requests allowed in the window
    pub const X_RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
    /// Requests left in the window
    pub const X_RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
    /// Unix timestamp when the allowance resets
    pub const X_RATE_LIMIT_RESET: &str = "x-ratelimit-reset";
    /// Seconds to wait before retrying
    pub const RETRY_AFTER: &str = "retry-after";
}

/// Seconds added to now for the reset header on accepted requests
const RESET_HORIZON_SECS: u64 = 3_600;
const UNKNOWN_CLIENT: &str = "unknown";
const ANONYMOUS_CALLER: &str = "anonymous";

/// What a rule counts requests by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitScope {
    /// Remote address of the connection
    Client,
    /// Bearer token of the caller, `anonymous` without one
    Caller,
}

/// One limit over a sliding window
#[derive(Debug, Clone)]
pub struct RateLimitRule {
    /// Rule name, part of the counting key
    pub name: &'static str,
    /// Requests allowed per window
    pub limit: usize,
    /// Window length
    pub window: Duration,
    /// Counting key
    pub scope: RateLimitScope,
    /// Path prefixes the rule covers; empty covers every path
    pub paths: &'static [&'static str],
}

impl RateLimitRule {
    fn applies_to(&self, method: &Method, path: &str) -> bool {
        let counted_method = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ]
        .contains(method);
        counted_method && (self.paths.is_empty() || self.paths.iter().any(|p| path.starts_with(p)))
    }

    fn key(&self, client: &str, caller: Option<&str>) -> String {
        match self.scope {
            RateLimitScope::Client => format!("ip:{client}:{}", self.name),
            RateLimitScope::Caller => {
                format!("user:{}:{}", caller.unwrap_or(ANONYMOUS_CALLER), self.name)
            }
        }
    }
}

/// Rules applied to the API by default
#[must_use]
pub fn default_rules() -> Vec<RateLimitRule> {
    vec![
        RateLimitRule {
            name: "api_global",
            limit: API_GLOBAL_LIMIT,
            window: Duration::from_secs(API_GLOBAL_WINDOW_SECS),
            scope: RateLimitScope::Client,
            paths: &["/api", "/routes"],
        },
        RateLimitRule {
            name: "auth_endpoints",
            limit: AUTH_LIMIT,
            window: Duration::from_secs(AUTH_WINDOW_SECS),
            scope: RateLimitScope::Client,
            paths: &["/api/auth", "/routes/auth"],
        },
        RateLimitRule {
            name: "ai_endpoints",
            limit: AI_LIMIT,
            window: Duration::from_secs(AI_WINDOW_SECS),
            scope: RateLimitScope::Caller,
            paths: &["/api/ai", "/routes/ai", "/api/chat"],
        },
        RateLimitRule {
            name: "burst_protection",
            limit: BURST_LIMIT,
            window: Duration::from_secs(BURST_WINDOW_SECS),
            scope: RateLimitScope::Client,
            paths: &[],
        },
    ]
}

/// Outcome of admitting a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request accepted
    Allowed {
        /// Smallest allowance left across applicable rules
        remaining: usize,
    },
    /// Request rejected
    Limited {
        /// Rule that rejected the request
        rule: &'static str,
        /// Limit of that rule
        limit: usize,
        /// Seconds until the caller should retry
        retry_after_secs: u64,
    },
}

/// In-memory sliding-window counters
pub struct RateLimiter {
    rules: Vec<RateLimitRule>,
    hits: DashMap<String, VecDeque<Instant>>,
    last_sweep: Mutex<Instant>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl RateLimiter {
    /// Limiter enforcing `rules`
    #[must_use]
    pub fn new(rules: Vec<RateLimitRule>) -> Self {
        Self {
            rules,
            hits: DashMap::new(),
            last_sweep: Mutex::new(Instant::now()),
        }
    }

    /// Admit a request at the current instant
    pub fn check(&self, method: &Method, path: &str, client: &str, caller: Option<&str>) -> RateLimitDecision {
        self.check_at(method, path, client, caller, Instant::now())
    }

    /// Admit a request at `now`
    pub fn check_at(
        &self,
        method: &Method,
        path: &str,
        client: &str,
        caller: Option<&str>,
        now: Instant,
    ) -> RateLimitDecision {
        self.sweep(now);
        let applicable: Vec<&RateLimitRule> = self
            .rules
            .iter()
            .filter(|rule| rule.applies_to(method, path))
            .collect();

        for rule in &applicable {
            let used = self.count(&rule.key(client, caller), rule.window, now);
            if used >= rule.limit {
                warn!(
                    rule = rule.name,
                    client,
                    used,
                    limit = rule.limit,
                    "Rate limit exceeded"
                );
                return RateLimitDecision::Limited {
                    rule: rule.name,
                    limit: rule.limit,
                    retry_after_secs: rule.window.as_secs(),
                };
            }
        }

        let mut remaining = UNLIMITED_REMAINING;
        for rule in &applicable {
            let mut entry = self.hits.entry(rule.key(client, caller)).or_default();
            entry.push_back(now);
            remaining = remaining.min(rule.limit.saturating_sub(entry.len()));
        }
        RateLimitDecision::Allowed { remaining }
    }

    fn count(&self, key: &str, window: Duration, now: Instant) -> usize {
        self.hits.get_mut(key).map_or(0, |mut entry| {
            prune(&mut entry, window, now);
            entry.len()
        })
    }

    /// Drop expired timestamps and idle keys once per sweep interval
    fn sweep(&self, now: Instant) {
        let Ok(mut last_sweep) = self.last_sweep.lock() else {
            return;
        };
        if now.saturating_duration_since(*last_sweep) < Duration::from_secs(SWEEP_INTERVAL_SECS) {
            return;
        }
        *last_sweep = now;
        drop(last_sweep);

        for rule in &self.rules {
            let suffix = format!(":{}", rule.name);
            self.hits.retain(|key, entry| {
                if key.ends_with(&suffix) {
                    prune(entry, rule.window, now);
                }
                !entry.is_empty()
            });
        }
    }

    /// Keys currently tracked
    #[must_use]
    pub fn tracked_keys(&self) -> usize {
        self.hits.len()
    }
}

fn prune(entry: &mut VecDeque<Instant>, window: Duration, now: Instant) {
    while entry
        .front()
        .is_some_and(|first| now.saturating_duration_since(*first) > window)
    {
        entry.pop_front();
    }
}

fn set_header(headers: &mut HeaderMap, name: &'static str, value: impl ToString) {
    if let Ok(value) = HeaderValue::from_str(&value.to_string()) {
        headers.insert(name, value);
    }
}

/// Axum middleware enforcing the server's [`RateLimiter`]
pub async fn rate_limit_middleware(
    State(resources): State<Arc<ServerResources>>,
    request: Request,
    next: Next,
) -> Response {
    if !resources.config.rate_limit_enabled {
        return next.run(request).await;
    }

    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| UNKNOWN_CLIENT.to_owned(), |info| info.0.ip().to_string());
    let decision = resources.rate_limiter.check(
        request.method(),
        request.uri().path(),
        &client,
        bearer_token(request.headers()),
    );
    let now = Utc::now().timestamp().unsigned_abs();

    match decision {
        RateLimitDecision::Limited {
            rule,
            limit,
            retry_after_secs,
        } => {
            let mut response =
                AppError::rate_limited(format!("Rate limit exceeded for {rule}")).into_response();
            let response_headers = response.headers_mut();
            set_header(response_headers, headers::RETRY_AFTER, retry_after_secs);
            set_header(response_headers, headers::X_RATE_LIMIT_LIMIT, limit);
            set_header(response_headers, headers::X_RATE_LIMIT_REMAINING, 0);
            set_header(response_headers, headers::X_RATE_LIMIT_RESET, now + retry_after_secs);
            response
        }
        RateLimitDecision::Allowed { remaining } => {
            let mut response = next.run(request).await;
            let response_headers = response.headers_mut();
            set_header(response_headers, headers::X_RATE_LIMIT_REMAINING, remaining);
            set_header(response_headers, headers::X_RATE_LIMIT_RESET, now + RESET_HORIZON_SECS);
            response
        }
    }
}
