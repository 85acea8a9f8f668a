// ABOUTME: Program generation engine for the NGX Pulse platform
// ABOUTME: Maps goals and preferences to a multi-week fitness or nutrition program
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![deny(unsafe_code)]

//! # Pulse Intelligence
//!
//! Synthesizes multi-week programs from static tables. Selection logic
//! (classification, durations, phases, metrics, text) is deterministic; only
//! the program name and the per-week content titles come from a random
//! source, which callers can seed.

/// Program generation
pub mod programs;

pub use programs::{plan_program, ProgramGenerator, ProgramPlan};
