// ABOUTME: Error handling surface of the main crate
// ABOUTME: Re-exports the unified error types from pulse-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Unified error handling.
//!
//! The types live in `pulse-core` so the generator crate shares them. With the
//! `http-response` feature enabled, `AppError` converts into an axum response.

pub use pulse_core::errors::*;
