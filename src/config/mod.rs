// ABOUTME: Configuration management module for server and client settings
// ABOUTME: Environment-derived server configuration and product feature flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Configuration module
//!
//! - **environment**: `ServerConfig` loaded from environment variables
//! - **feature_flags**: product toggles such as lite mode and trial length

/// Environment and server configuration
pub mod environment;
/// Product feature flags
pub mod feature_flags;

pub use environment::{
    AuthConfig, AuthProviderKind, DemoDataConfig, Environment, LogLevel, ProgramServiceConfig,
    ServerConfig, SupabaseConfig,
};
pub use feature_flags::FeatureFlags;
