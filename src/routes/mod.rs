// ABOUTME: Route module organization for the NGX Pulse HTTP endpoints
// ABOUTME: Health, system auth status, coach messages, program generation, and staging demo routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Route module for the NGX Pulse backend
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the service layer.

/// AI coach message routes
pub mod coach_messages;
/// Staging demo dataset routes
pub mod demo;
/// Health check routes
pub mod health;
/// Program generation routes
pub mod programs;
/// System auth status route
pub mod system;

pub use coach_messages::CoachMessageRoutes;
pub use demo::DemoRoutes;
pub use health::HealthRoutes;
pub use programs::ProgramRoutes;
pub use system::SystemRoutes;
