// ABOUTME: Persisted UI state commands for pulse-cli
// ABOUTME: Trial countdown status and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use ngx_pulse::{config::FeatureFlags, errors::AppResult, trial::TrialTracker};

use crate::helpers::display::display_trial;

/// Print the trial countdown, starting the trial on first use
pub fn trial_status(tracker: &TrialTracker, features: &FeatureFlags) -> AppResult<()> {
    let status = tracker.status(features.trial_length_days)?;
    display_trial(&status, &features.genesis_upgrade_url);
    Ok(())
}

/// Forget the trial start date
pub fn trial_reset(tracker: &TrialTracker) -> AppResult<()> {
    tracker.reset()?;
    println!("Trial reset; the next status check starts a new trial.");
    Ok(())
}
