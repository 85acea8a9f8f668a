// ABOUTME: Security headers applied to every HTTP response
// ABOUTME: CSP, frame and sniffing protections, no-store caching, and HSTS behind HTTPS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! # Security Headers
//!
//! [`security_headers_middleware`] runs after the handler and stamps the
//! response with the headers in [`SecurityHeadersConfig`]. HSTS is only sent
//! when the request arrived over HTTPS, directly or through a proxy that sets
//! `X-Forwarded-Proto`. Responses under `/api` and `/routes` also carry the
//! API version and the caller's trace id.

use crate::client::TRACE_ID_HEADER;
use crate::constants::endpoints::ROUTES_PREFIX;
use crate::constants::security_headers::{
    API_VERSION, CONTENT_SECURITY_POLICY, STRICT_TRANSPORT_SECURITY,
};
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use http::header::{
    CACHE_CONTROL, CONTENT_SECURITY_POLICY as CSP, EXPIRES, PRAGMA, REFERRER_POLICY, SERVER,
    STRICT_TRANSPORT_SECURITY as HSTS, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use http::{HeaderMap, HeaderName, HeaderValue};

const API_PREFIX: &str = "/api";
const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Header values stamped on every response
#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    /// Content-Security-Policy
    pub csp: String,
    /// Strict-Transport-Security for HTTPS requests; `None` disables it
    pub hsts: Option<String>,
    /// X-Frame-Options
    pub frame_options: String,
    /// Referrer-Policy
    pub referrer_policy: String,
    /// X-Permitted-Cross-Domain-Policies
    pub cross_domain_policies: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            csp: CONTENT_SECURITY_POLICY.to_owned(),
            hsts: Some(STRICT_TRANSPORT_SECURITY.to_owned()),
            frame_options: "DENY".to_owned(),
            referrer_policy: "strict-origin-when-cross-origin".to_owned(),
            cross_domain_policies: "none".to_owned(),
        }
    }
}

impl SecurityHeadersConfig {
    /// Stamp `headers` for a response to a request described by the arguments
    pub fn apply(&self, headers: &mut HeaderMap, path: &str, https: bool, trace_id: Option<&str>) {
        insert(headers, CSP, &self.csp);
        if https {
            if let Some(hsts) = &self.hsts {
                insert(headers, HSTS, hsts);
            }
        }
        insert(headers, X_XSS_PROTECTION, "1; mode=block");
        insert(headers, X_CONTENT_TYPE_OPTIONS, "nosniff");
        insert(headers, X_FRAME_OPTIONS, &self.frame_options);
        insert(headers, REFERRER_POLICY, &self.referrer_policy);
        insert(
            headers,
            HeaderName::from_static("x-permitted-cross-domain-policies"),
            &self.cross_domain_policies,
        );
        insert(
            headers,
            HeaderName::from_static("x-robots-tag"),
            "noindex, nofollow, nosnippet, noarchive",
        );
        insert(headers, CACHE_CONTROL, "no-store, no-cache, must-revalidate, private");
        insert(headers, PRAGMA, "no-cache");
        insert(headers, EXPIRES, "0");

        headers.remove(SERVER);
        headers.remove("x-powered-by");

        if path.starts_with(API_PREFIX) || path.starts_with(ROUTES_PREFIX) {
            insert(headers, HeaderName::from_static("x-api-version"), API_VERSION);
            insert(
                headers,
                HeaderName::from_static("x-request-id"),
                trace_id.unwrap_or(UNKNOWN_REQUEST_ID),
            );
        }
    }
}

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}

fn is_https(request: &Request<Body>) -> bool {
    request.uri().scheme_str() == Some("https")
        || request
            .headers()
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

/// Axum middleware applying [`SecurityHeadersConfig::default`]
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let https = is_https(&request);
    let trace_id = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(request).await;
    SecurityHeadersConfig::default().apply(
        response.headers_mut(),
        &path,
        https,
        trace_id.as_deref(),
    );
    response
}
