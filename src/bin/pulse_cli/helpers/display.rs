// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse
// ABOUTME: Output formatting helpers for pulse-cli
// ABOUTME: Consistent display of programs, sessions, UI state, and messages

use ngx_pulse::{
    errors::AppResult,
    models::{AICoachMessage, AIGeneratedProgram, AuthSession, AuthUser},
    trial::TrialStatus,
};
use serde::Serialize;

/// Pretty-print any serializable value
pub fn display_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a generated program as JSON
pub fn display_program(program: &AIGeneratedProgram) -> AppResult<()> {
    eprintln!(
        "{} ({}, {} weeks)",
        program.program_name, program.program_type, program.estimated_duration_weeks
    );
    display_json(program)
}

/// Print a user
pub fn display_user(user: &AuthUser) {
    println!("User:");
    println!("   Id: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Created: {}", user.created_at.format("%Y-%m-%d %H:%M UTC"));
}

/// Print a session without the full token
pub fn display_session(session: &AuthSession) {
    display_user(&session.user);
    let preview: String = session.access_token.chars().take(12).collect();
    println!("Session:");
    println!("   Token: {preview}...");
}

/// Print the sidebar flag
pub fn display_sidebar(collapsed: bool) {
    println!(
        "Sidebar: {}",
        if collapsed { "collapsed" } else { "expanded" }
    );
}

/// Print trial status
pub fn display_trial(status: &TrialStatus, upgrade_url: &str) {
    println!("Trial started: {}", status.started_at.format("%Y-%m-%d"));
    if status.expired {
        println!("Trial expired. Upgrade at {upgrade_url}");
    } else {
        println!("Days remaining: {}", status.days_remaining);
    }
}

/// Print coach messages, newest first as served
pub fn display_messages(messages: &[AICoachMessage]) {
    if messages.is_empty() {
        println!("No coach messages.");
        return;
    }
    for message in messages {
        let marker = if message.is_unread() { "*" } else { " " };
        println!(
            "{marker} [{:?}/{:?}] {}",
            message.message_type,
            message.urgency,
            message.title.as_deref().unwrap_or("(untitled)")
        );
        println!("    {}", message.body);
    }
}
