// ABOUTME: Core types and constants for the NGX Pulse wellness platform
// ABOUTME: Foundation crate with error handling, wire models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![deny(unsafe_code)]

//! # Pulse Core
//!
//! Foundation crate providing shared types and constants for NGX Pulse. It is
//! kept free of runtime dependencies so the generator crate and the main crate
//! can both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, endpoints, and environment variable names
//! - **models**: Program, coach message, and auth session models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
