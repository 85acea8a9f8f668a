// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, endpoints, environment variable names, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Keys used in browser-style key-value storage
pub mod storage_keys {
    /// Sidebar collapsed flag (JSON boolean)
    pub const SIDEBAR_COLLAPSED: &str = "ngx-sidebar-collapsed";
    /// Serialized demo session
    pub const DEMO_SESSION: &str = "demo_session";
    /// Serialized session of the remote auth provider
    pub const AUTH_SESSION: &str = "auth_session";
    /// Trial start timestamp (RFC 3339)
    pub const TRIAL_STARTED_AT: &str = "pulse_trial_started_at";
}

/// API endpoints
pub mod endpoints {
    /// Liveness endpoint consumed by the generated client
    pub const HEALTHZ: &str = "/_healthz";
    /// Prefix under which all API routers are mounted
    pub const ROUTES_PREFIX: &str = "/routes";
    /// AI coach messages listing
    pub const AI_COACH_MESSAGES: &str = "/routes/ai-coach-messages/";
    /// Program generation
    pub const GENERATE_PROGRAM: &str = "/routes/ai/generate-program";
    /// System health check
    pub const SYSTEM_HEALTH: &str = "/routes/system/health";
    /// Confirms the caller's bearer token
    pub const SYSTEM_AUTH_STATUS: &str = "/routes/system/auth-status";
    /// Staging demo dataset status
    pub const DEMO_STATUS: &str = "/routes/demo/status";
    /// Staging demo coach messages
    pub const DEMO_MESSAGES: &str = "/routes/demo/messages";
    /// Staging demo health metrics
    pub const DEMO_HEALTH_METRICS: &str = "/routes/demo/health-metrics";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
}

/// Service names for structured logging
pub mod service_names {
    /// Backend server
    pub const NGX_PULSE_SERVER: &str = "ngx-pulse-server";
    /// Command-line tool
    pub const PULSE_CLI: &str = "pulse-cli";
}

/// Artificial latency of the demo services, in milliseconds
pub mod demo_latency {
    /// Lower bound of the program generation delay
    pub const PROGRAM_DELAY_MIN_MS: u64 = 2_000;
    /// Upper bound of the program generation delay
    pub const PROGRAM_DELAY_MAX_MS: u64 = 4_000;
    /// Demo sign-in delay
    pub const SIGN_IN_DELAY_MS: u64 = 800;
    /// Demo sign-up delay
    pub const SIGN_UP_DELAY_MS: u64 = 1_000;
}

/// Demo credential rules
pub mod demo_auth {
    /// Minimum password length accepted by demo sign-up
    pub const MIN_SIGN_UP_PASSWORD_LEN: usize = 6;
    /// Minimum password length accepted by demo sign-in
    pub const MIN_SIGN_IN_PASSWORD_LEN: usize = 1;
    /// Prefix of generated demo user ids
    pub const USER_ID_PREFIX: &str = "demo-user-";
    /// Prefix of generated demo access tokens
    pub const TOKEN_PREFIX: &str = "demo-token-";
}

/// Caller identity when staging demo mode is on
pub mod staging_user {
    /// User id matching the embedded demo dataset
    pub const ID: &str = "demo-user-1";
    /// Email of the staging user
    pub const EMAIL: &str = "demo.user@nexus.pulse";
}

/// Per-client request limits
pub mod rate_limits {
    /// API-wide limit per client address
    pub const API_GLOBAL_LIMIT: usize = 1_000;
    /// Window of the API-wide limit
    pub const API_GLOBAL_WINDOW_SECS: u64 = 3_600;
    /// Limit on auth endpoints per client address
    pub const AUTH_LIMIT: usize = 10;
    /// Window of the auth limit
    pub const AUTH_WINDOW_SECS: u64 = 300;
    /// Limit on AI endpoints per caller
    pub const AI_LIMIT: usize = 50;
    /// Window of the AI limit
    pub const AI_WINDOW_SECS: u64 = 3_600;
    /// Short-window burst limit per client address
    pub const BURST_LIMIT: usize = 20;
    /// Window of the burst limit
    pub const BURST_WINDOW_SECS: u64 = 60;
    /// Remaining count reported when no rule applies
    pub const UNLIMITED_REMAINING: usize = 1_000;
    /// Seconds between sweeps of idle client entries
    pub const SWEEP_INTERVAL_SECS: u64 = 60;
}

/// Response security header values
pub mod security_headers {
    /// Default Content-Security-Policy
    pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
        script-src 'self' 'unsafe-inline' 'unsafe-eval' https://fonts.googleapis.com https://fonts.gstatic.com; \
        style-src 'self' 'unsafe-inline' https://fonts.googleapis.com https://fonts.gstatic.com; \
        font-src 'self' https://fonts.googleapis.com https://fonts.gstatic.com; \
        img-src 'self' data: https: blob:; \
        connect-src 'self' https://*.supabase.co https://api.openai.com wss://*.supabase.co; \
        media-src 'self'; \
        object-src 'none'; \
        frame-src 'none'; \
        base-uri 'self'; \
        form-action 'self'; \
        frame-ancestors 'none'; \
        upgrade-insecure-requests";
    /// HSTS value sent on HTTPS requests
    pub const STRICT_TRANSPORT_SECURITY: &str = "max-age=31536000; includeSubDomains; preload";
    /// API version advertised on API responses
    pub const API_VERSION: &str = "1.0";
}

/// Trial and upgrade defaults
pub mod trial {
    /// Default trial length
    pub const DEFAULT_TRIAL_LENGTH_DAYS: u32 = 30;
    /// Default upgrade destination
    pub const DEFAULT_UPGRADE_URL: &str = "https://genesis.ngx.ai";
}

/// AI coach message defaults
pub mod coach_messages {
    /// Placeholder user until the messages route is wired to real auth
    pub const MOCK_USER_ID: &str = "00000000-0000-0000-0000-000000000000";
    /// Number of messages returned by the listing endpoint
    pub const DASHBOARD_MESSAGE_LIMIT: usize = 3;
}

/// API client limits
pub mod client {
    /// Error log entries retained in memory
    pub const MAX_ERROR_LOG_ENTRIES: usize = 50;
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default backend base URL
    pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
}

/// Environment variable names
pub mod env_vars {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind host
    pub const HOST: &str = "HOST";
    /// Backend base URL used by the client
    pub const API_BASE_URL: &str = "API_BASE_URL";
    /// `demo` or `supabase`
    pub const AUTH_PROVIDER: &str = "AUTH_PROVIDER";
    /// Supabase project URL
    pub const SUPABASE_URL: &str = "SUPABASE_URL";
    /// Supabase anonymous key
    pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
    /// Path of the JSON file store
    pub const STORAGE_PATH: &str = "PULSE_STORAGE_PATH";
    /// Program delay lower bound
    pub const PROGRAM_DELAY_MIN_MS: &str = "PROGRAM_DELAY_MIN_MS";
    /// Program delay upper bound
    pub const PROGRAM_DELAY_MAX_MS: &str = "PROGRAM_DELAY_MAX_MS";
    /// Enables artificial demo auth latency
    pub const DEMO_AUTH_DELAY: &str = "DEMO_AUTH_DELAY";
    /// Seed for the program generator RNG
    pub const PROGRAM_RNG_SEED: &str = "PROGRAM_RNG_SEED";
    /// Staging demo mode switch
    pub const STAGING_DEMO_MODE: &str = "STAGING_DEMO_MODE";
    /// Demo dataset fixture path
    pub const DEMO_DATA_PATH: &str = "DEMO_DATA_PATH";
    /// Per-client rate limiting switch
    pub const RATE_LIMIT_ENABLED: &str = "RATE_LIMIT_ENABLED";
    /// Lite mode (build-time name)
    pub const VITE_PULSE_LITE: &str = "VITE_PULSE_LITE";
    /// Lite mode
    pub const PULSE_LITE: &str = "PULSE_LITE";
    /// Trial length
    pub const TRIAL_LENGTH_DAYS: &str = "VITE_TRIAL_LENGTH_DAYS";
    /// Upgrade URL
    pub const UPGRADE_URL: &str = "VITE_GENESIS_UPGRADE_URL";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}
