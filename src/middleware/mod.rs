// ABOUTME: HTTP middleware for tracing, cross-origin access, security headers, and rate limits
// ABOUTME: Layers applied around every route of the backend router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

/// CORS configuration
pub mod cors;
/// Sliding-window request limits
pub mod rate_limiting;
/// Response security headers
pub mod security_headers;
/// Request spans keyed by the client trace id
pub mod tracing;

pub use cors::setup_cors;
pub use rate_limiting::{rate_limit_middleware, RateLimiter};
pub use security_headers::security_headers_middleware;
pub use tracing::{create_request_span, trace_layer, HttpTraceLayer};
