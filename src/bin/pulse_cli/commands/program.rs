// ABOUTME: Program generation command for pulse-cli
// ABOUTME: Builds a request from a file or arguments and prints the generated program
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use ngx_pulse::{
    config::ProgramServiceConfig,
    errors::{AppError, AppResult},
    models::{GenerateProgramRequest, GoalCategory, ProgramGoal, ProgramTrack, UserProfile},
    services::ProgramService,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_program;

type Result<T> = AppResult<T>;

/// Load a request from a JSON file
pub fn read_request(path: &Path) -> Result<GenerateProgramRequest> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("Invalid request file {}: {e}", path.display()))
    })
}

/// Build a request from command-line arguments
pub fn build_request(
    track: &str,
    goals: &[String],
    experience_level: String,
    preferences: &[String],
    user_id: String,
) -> Result<GenerateProgramRequest> {
    let program_type = match track.trim().to_lowercase().as_str() {
        "fitness" => ProgramTrack::Fitness,
        "nutrition" => ProgramTrack::Nutrition,
        other => {
            return Err(AppError::invalid_input(format!(
                "Unknown track '{other}', expected fitness or nutrition"
            )))
        }
    };

    Ok(GenerateProgramRequest {
        program_type,
        goals: goals.iter().map(|raw| parse_goal(raw)).collect::<Result<_>>()?,
        preferences: preferences
            .iter()
            .map(|raw| parse_preference(raw))
            .collect::<Result<BTreeMap<_, _>>>()?,
        user_profile: UserProfile {
            experience_level,
            ..UserProfile::default()
        },
        user_id,
    })
}

fn parse_goal(raw: &str) -> Result<ProgramGoal> {
    let mut parts = raw.splitn(3, ':');
    let (Some(id), Some(label), Some(category)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::invalid_input(format!(
            "Goal '{raw}' must be id:label:category"
        )));
    };
    let category: GoalCategory =
        serde_json::from_value(Value::String(category.trim().to_lowercase()))?;
    Ok(ProgramGoal::new(id.trim(), label.trim(), category))
}

fn parse_preference(raw: &str) -> Result<(String, String)> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .ok_or_else(|| AppError::invalid_input(format!("Preference '{raw}' must be key=value")))
}

/// Service settings for a CLI run: instant unless latency is requested
pub fn service_config(
    configured: &ProgramServiceConfig,
    seed: Option<u64>,
    simulate_latency: bool,
) -> ProgramServiceConfig {
    let base = if simulate_latency {
        *configured
    } else {
        ProgramServiceConfig::instant()
    };
    ProgramServiceConfig {
        rng_seed: seed.or(configured.rng_seed),
        ..base
    }
}

/// Generate and print a program
pub async fn generate(config: &ProgramServiceConfig, request: &GenerateProgramRequest) -> Result<()> {
    info!(goals = request.goals.len(), "Generating program");
    let program = ProgramService::new(config).generate(request).await?;
    display_program(&program)
}
