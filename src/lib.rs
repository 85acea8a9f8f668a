// ABOUTME: Main library entry point for the NGX Pulse wellness platform
// ABOUTME: Program generation, demo auth, UI state persistence, and the companion HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![deny(unsafe_code)]

//! # NGX Pulse
//!
//! Core of the NGX Pulse wellness frontend: the pieces that hold state or talk
//! to a backend, independent of any UI framework.
//!
//! ## Architecture
//!
//! - **Storage**: string key-value persistence (in-memory or JSON file)
//! - **Auth**: `AuthProvider` trait with a demo mock and a Supabase client
//! - **Sidebar / Trial**: small persisted UI state machines
//! - **Services**: program generation, coach messages, staging dataset
//! - **Client**: typed backend client with trace ids and an error log
//! - **Server**: axum routes the frontend calls
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ngx_pulse::config::ServerConfig;
//! use ngx_pulse::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     ngx_pulse::server::run(config).await
//! }
//! ```

/// Authentication providers and auth state subscriptions
pub mod auth;

/// Typed HTTP client for the backend
pub mod client;

/// Environment configuration and feature flags
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request spans)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Domain services behind the routes
pub mod services;

/// Persisted sidebar collapse state
pub mod sidebar;

/// Key-value storage backends
pub mod storage;

/// Free trial countdown
pub mod trial;

pub use pulse_core::{constants, models};
