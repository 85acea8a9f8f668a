// ABOUTME: Product feature flags derived from environment variables
// ABOUTME: Lite mode, report toggles, trial length, and the upgrade destination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::env_vars;
use crate::constants::trial::{DEFAULT_TRIAL_LENGTH_DAYS, DEFAULT_UPGRADE_URL};
use serde::Serialize;
use std::env;
use tracing::warn;

/// Feature toggles visible to the product surfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    /// Reduced feature set
    pub lite_mode: bool,
    /// Weekly PDF report generation
    pub weekly_pdf_reports_enabled: bool,
    /// Daily AI tip card
    pub ai_tip_of_day_enabled: bool,
    /// Trial length in days
    pub trial_length_days: u32,
    /// Where upgrade prompts send the user
    pub genesis_upgrade_url: String,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            lite_mode: false,
            weekly_pdf_reports_enabled: true,
            ai_tip_of_day_enabled: true,
            trial_length_days: DEFAULT_TRIAL_LENGTH_DAYS,
            genesis_upgrade_url: DEFAULT_UPGRADE_URL.to_owned(),
        }
    }
}

impl FeatureFlags {
    /// Read flags from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read flags through an arbitrary variable lookup.
    ///
    /// `VITE_PULSE_LITE` takes precedence over `PULSE_LITE` whenever it is set,
    /// even to a value other than "true".
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lite_mode = lookup(env_vars::VITE_PULSE_LITE)
            .or_else(|| lookup(env_vars::PULSE_LITE))
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));

        let trial_length_days = match lookup(env_vars::TRIAL_LENGTH_DAYS) {
            None => DEFAULT_TRIAL_LENGTH_DAYS,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid trial length, using default");
                DEFAULT_TRIAL_LENGTH_DAYS
            }),
        };

        let genesis_upgrade_url = lookup(env_vars::UPGRADE_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPGRADE_URL.to_owned());

        Self {
            lite_mode,
            trial_length_days,
            genesis_upgrade_url,
            ..Self::default()
        }
    }
}
