// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates a span per HTTP request carrying the client's X-Trace-ID when present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use axum::body::Body;
use http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};
use uuid::Uuid;

/// Trace layer type installed on the router
pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, (), DefaultOnResponse>;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, trace_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        trace_id = %trace_id,
    )
}

/// Span maker that reuses the client trace id or generates a request id
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl MakeSpan<Body> for RequestSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        let trace_id = request
            .headers()
            .get("x-trace-id")
            .and_then(|value| value.to_str().ok())
            .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);
        create_request_span(request.method().as_str(), request.uri().path(), &trace_id)
    }
}

/// Trace layer logging one span per request and its response status
#[must_use]
pub fn trace_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(())
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
