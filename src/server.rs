// ABOUTME: HTTP server assembly: shared resources, router, and serve loop
// ABOUTME: Wires config-driven services into axum routes behind CORS, tracing, security, and rate limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! # Server
//!
//! [`ServerResources`] holds the services every handler shares. Build it once
//! from a [`ServerConfig`], hand it to [`build_router`], and run the result
//! with [`serve`] or [`run`].

use crate::auth::TokenVerifier;
use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::middleware::{
    rate_limit_middleware, security_headers_middleware, setup_cors, trace_layer, RateLimiter,
};
use crate::routes::{CoachMessageRoutes, DemoRoutes, HealthRoutes, ProgramRoutes, SystemRoutes};
use crate::services::{CoachMessageService, DemoDataset, ProgramService};
use axum::{middleware, Router};
use http::Uri;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared resources for request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Program generation
    pub programs: Arc<ProgramService>,
    /// Dashboard coach messages
    pub coach_messages: Arc<CoachMessageService>,
    /// Staging dataset; empty unless demo mode is on
    pub demo_dataset: Arc<DemoDataset>,
    /// Bearer token checks for authenticated routes
    pub token_verifier: Arc<TokenVerifier>,
    /// Per-client request counters
    pub rate_limiter: Arc<RateLimiter>,
}

impl ServerResources {
    /// Build every service from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the demo fixture cannot be loaded
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let demo_dataset = DemoDataset::for_config(&config.demo)?;
        Ok(Self {
            programs: Arc::new(ProgramService::new(&config.programs)),
            coach_messages: Arc::new(CoachMessageService::default()),
            demo_dataset: Arc::new(demo_dataset),
            token_verifier: Arc::new(TokenVerifier::from_config(&config)),
            rate_limiter: Arc::new(RateLimiter::default()),
            config: Arc::new(config),
        })
    }
}

/// Router with every route and the middleware stack.
///
/// Outermost first: CORS, request tracing, security headers, rate limiting.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors_allowed_origins);
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(SystemRoutes::routes(Arc::clone(&resources)))
        .merge(CoachMessageRoutes::routes(Arc::clone(&resources)))
        .merge(ProgramRoutes::routes(Arc::clone(&resources)))
        .merge(DemoRoutes::routes(Arc::clone(&resources)))
        .fallback(handle_unknown_route)
        .layer(middleware::from_fn_with_state(resources, rate_limit_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(trace_layer())
        .layer(cors)
}

async fn handle_unknown_route(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Serve on an already bound listener until ctrl-c
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "NGX Pulse server listening");
    axum::serve(
        listener,
        build_router(resources).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))
}

/// Bind the configured address and serve
///
/// # Errors
///
/// Returns an error if the address is invalid, the port is taken, or a service fails to start
pub async fn run(config: ServerConfig) -> AppResult<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
        .parse()
        .map_err(|e| AppError::config(format!("Invalid bind address: {e}")))?;
    let resources = Arc::new(ServerResources::from_config(config)?);
    let listener = TcpListener::bind(addr).await?;
    serve(listener, resources).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
