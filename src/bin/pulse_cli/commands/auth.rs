// ABOUTME: Authentication commands for pulse-cli
// ABOUTME: Sign in, sign up, session inspection, and sign out through the configured provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use ngx_pulse::{auth::AuthProvider, errors::AppResult};
use tracing::info;

use crate::helpers::display::{display_session, display_user};

type Result<T> = AppResult<T>;

/// Sign in and print the new session
pub async fn sign_in(provider: &dyn AuthProvider, email: &str, password: &str) -> Result<()> {
    info!(provider = provider.name(), "Signing in");
    let data = provider.sign_in_with_password(email, password).await?;
    display_session(&data.session);
    Ok(())
}

/// Register and print the new user
pub async fn sign_up(provider: &dyn AuthProvider, email: &str, password: &str) -> Result<()> {
    info!(provider = provider.name(), "Signing up");
    let data = provider.sign_up(email, password).await?;
    display_user(&data.user);
    match data.session {
        Some(session) => display_session(&session),
        None => println!("No session created; sign in to continue."),
    }
    Ok(())
}

/// Print the stored session, if any
pub async fn session(provider: &dyn AuthProvider) -> Result<()> {
    match provider.get_session().await? {
        Some(session) => display_session(&session),
        None => println!("Not signed in."),
    }
    Ok(())
}

/// Sign out
pub async fn sign_out(provider: &dyn AuthProvider) -> Result<()> {
    provider.sign_out().await?;
    println!("Signed out.");
    Ok(())
}
