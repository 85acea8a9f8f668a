// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse
// ABOUTME: Re-exports command modules for pulse-cli
// ABOUTME: Program, auth, UI state, and backend API commands

pub mod api;
pub mod auth;
pub mod program;
pub mod ui;
