// ABOUTME: Backend API commands for pulse-cli
// ABOUTME: Health check and coach message listing through the typed client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use ngx_pulse::{client::BrainClient, errors::AppResult};

use crate::helpers::display::{display_json, display_messages};

/// Call the health endpoint
pub async fn healthz(base_url: &str) -> AppResult<()> {
    let body = BrainClient::new(base_url).handle_healthz().await?;
    display_json(&body)
}

/// List dashboard coach messages
pub async fn messages(base_url: &str) -> AppResult<()> {
    let messages = BrainClient::new(base_url).get_ai_coach_messages().await?;
    display_messages(&messages);
    Ok(())
}
