// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Program generation, AI coach messages, and the staging demo dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Domain service layer
//!
//! Route handlers stay thin and delegate here, so the CLI and tests can use the
//! same logic without going through HTTP.

/// AI coach message catalog
pub mod coach_messages;

/// Staging demo dataset
pub mod demo_dataset;

/// Program generation with simulated latency
pub mod programs;

pub use coach_messages::CoachMessageService;
pub use demo_dataset::DemoDataset;
pub use programs::ProgramService;
