// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, instant-latency configuration, router construction, and a live server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `ngx_pulse`

use ngx_pulse::{
    config::{ProgramServiceConfig, ServerConfig},
    server::{build_router, ServerResources},
    storage::{memory::InMemoryStore, KeyValueStore},
};
use std::net::SocketAddr;
use std::sync::{Arc, Once};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Default configuration without artificial latency and with a fixed seed
pub fn test_config() -> ServerConfig {
    ServerConfig {
        programs: ProgramServiceConfig {
            rng_seed: Some(42),
            ..ProgramServiceConfig::instant()
        },
        ..ServerConfig::default()
    }
}

/// Shared resources for `config`
pub fn test_resources(config: ServerConfig) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::from_config(config).expect("Failed to build server resources"))
}

/// Full router over `config`
pub fn test_router(config: ServerConfig) -> axum::Router {
    build_router(test_resources(config))
}

/// Fresh in-memory store
pub fn memory_store() -> Arc<dyn KeyValueStore> {
    Arc::new(InMemoryStore::new())
}

/// Serve the full router on an ephemeral port; returns its base URL
pub async fn spawn_server(config: ServerConfig) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    let app = test_router(config);
    let handle = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Test server failed");
    });
    (format!("http://{addr}"), handle)
}
