// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Lets the web frontend call the backend from another origin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use super::rate_limiting::headers::{X_RATE_LIMIT_REMAINING, X_RATE_LIMIT_RESET};
use crate::client::TRACE_ID_HEADER;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS from a comma-separated origin list.
///
/// An empty list or `*` allows any origin.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://pulse.ngx.ai,http://localhost:5173"
/// ```
pub fn setup_cors(allowed_origins: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    let trace_id = HeaderName::from_bytes(TRACE_ID_HEADER.to_lowercase().as_bytes())
        .unwrap_or_else(|_| HeaderName::from_static("x-trace-id"));

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("apikey"),
            trace_id.clone(),
        ])
        .expose_headers([
            trace_id,
            HeaderName::from_static(X_RATE_LIMIT_REMAINING),
            HeaderName::from_static(X_RATE_LIMIT_RESET),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
