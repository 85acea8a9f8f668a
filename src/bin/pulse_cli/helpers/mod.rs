// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse
// ABOUTME: Re-exports helper modules for pulse-cli
// ABOUTME: Provides output formatting utilities

pub mod display;
