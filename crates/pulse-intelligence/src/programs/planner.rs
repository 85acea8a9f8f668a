// ABOUTME: Deterministic program planning from a generation request
// ABOUTME: Weekly phases, success metrics, rationale, and description without randomness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Pure selection logic.
//!
//! Everything here is a function of the request alone. The only randomized
//! parts of a program (its name and per-week content titles) are chosen later
//! by [`super::generator::present`].

use super::catalog::{self, NamePool, Phase};
use super::classifier;
use pulse_core::models::{GenerateProgramRequest, ProgramGoal, ProgramTrack, ProgramType};
use std::collections::BTreeMap;

/// Maximum number of detailed weeks emitted, whatever the declared duration
pub const WEEKLY_DETAIL_HORIZON: u32 = 8;

/// Maximum number of success metrics on a program
pub const MAX_SUCCESS_METRICS: usize = 5;

/// Goal label used when the first goal is missing or unlabeled
const FALLBACK_PRIMARY_GOAL: &str = "mejora general";

/// A week before content titles are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWeek {
    /// 1-based week number
    pub week: u32,
    /// Phase of the week
    pub phase: Phase,
    /// Focus line
    pub focus: &'static str,
    /// Milestones
    pub milestones: [&'static str; 3],
}

/// Deterministic part of a generated program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramPlan {
    /// Requested track
    pub track: ProgramTrack,
    /// Classification
    pub program_type: ProgramType,
    /// Pool the name will be drawn from
    pub name_pool: NamePool,
    /// Declared duration
    pub estimated_duration_weeks: u32,
    /// Detailed weeks, at most [`WEEKLY_DETAIL_HORIZON`]
    pub weeks: Vec<PlannedWeek>,
    /// Success metrics, at most [`MAX_SUCCESS_METRICS`]
    pub success_metrics: Vec<String>,
    /// Rationale paragraph
    pub ai_rationale: String,
    /// Description paragraph
    pub program_description: String,
}

/// Build the deterministic plan for a request
#[must_use]
pub fn plan_program(request: &GenerateProgramRequest) -> ProgramPlan {
    let track = request.program_type;
    let goals = &request.goals;
    let estimated_duration_weeks =
        classifier::estimate_duration_weeks(track, goals, &request.user_profile);

    ProgramPlan {
        track,
        program_type: classifier::classify(track, goals),
        name_pool: classifier::name_pool(track, goals),
        estimated_duration_weeks,
        weeks: plan_weeks(track, estimated_duration_weeks),
        success_metrics: success_metrics(track, goals),
        ai_rationale: rationale(request),
        program_description: description(request),
    }
}

/// Weeks `1..=min(duration, horizon)` with their phase wording
#[must_use]
pub fn plan_weeks(track: ProgramTrack, duration_weeks: u32) -> Vec<PlannedWeek> {
    (1..=duration_weeks.min(WEEKLY_DETAIL_HORIZON))
        .map(|week| {
            let phase = Phase::for_week(week);
            let content = catalog::phase_content(track, phase);
            PlannedWeek {
                week,
                phase,
                focus: content.focus,
                milestones: content.milestones,
            }
        })
        .collect()
}

/// Per-goal metrics in goal order, then the track metrics, truncated.
///
/// Duplicates are kept: two goals sharing an id contribute twice.
#[must_use]
pub fn success_metrics(track: ProgramTrack, goals: &[ProgramGoal]) -> Vec<String> {
    goals
        .iter()
        .flat_map(|goal| catalog::goal_metrics(&goal.id).iter())
        .chain(catalog::track_metrics(track).iter())
        .take(MAX_SUCCESS_METRICS)
        .map(|metric| (*metric).to_owned())
        .collect()
}

/// Preference value, falling back when the key is missing or empty
fn preference<'a>(preferences: &'a BTreeMap<String, String>, key: &str, default: &'a str) -> &'a str {
    preferences
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
}

/// Rationale paragraph explaining how the request shaped the program
#[must_use]
pub fn rationale(request: &GenerateProgramRequest) -> String {
    let primary_goals = request
        .goals
        .iter()
        .take(2)
        .map(|goal| goal.label.as_str())
        .collect::<Vec<_>>()
        .join(" y ");
    let experience = &request.user_profile.experience_level;
    let prefs = &request.preferences;

    match request.program_type {
        ProgramTrack::Nutrition => {
            let diet_approach = preference(prefs, "diet_approach", "flexible");
            let caloric_goal = preference(prefs, "caloric_goal", "adaptativo").to_lowercase();
            let meal_frequency = preference(prefs, "meal_frequency", "flexible").to_lowercase();
            format!(
                "He diseñado este programa nutricional considerando tus objetivos principales de {primary_goals}. \
                 Basándome en tu nivel de experiencia {experience} y preferencia por {diet_approach}, \
                 he estructurado un plan alimentario {caloric_goal} con {meal_frequency}. \
                 El programa incorpora evidencia científica actual y se adapta a tus restricciones específicas \
                 para maximizar adherencia nutricional y resultados metabólicos sostenibles."
            )
        }
        ProgramTrack::Fitness => {
            let time_available = preference(prefs, "workout_frequency", "variable");
            let workout_type = preference(prefs, "workout_type", "mixto").to_lowercase();
            format!(
                "He diseñado este programa de entrenamiento considerando tus objetivos principales de {primary_goals}. \
                 Basándome en tu nivel {experience} y disponibilidad de {time_available}, \
                 he estructurado un plan progresivo con enfoque en {workout_type} que equilibra desafío y recuperación. \
                 El programa incorpora periodización inteligente y se adapta a tus preferencias específicas \
                 para maximizar adherencia y resultados a largo plazo."
            )
        }
    }
}

/// Description paragraph built around the primary goal
#[must_use]
pub fn description(request: &GenerateProgramRequest) -> String {
    let primary_goal = request
        .goals
        .first()
        .map(|goal| goal.label.as_str())
        .filter(|label| !label.is_empty())
        .unwrap_or(FALLBACK_PRIMARY_GOAL)
        .to_lowercase();
    let track_label = match request.program_type {
        ProgramTrack::Nutrition => "nutricional",
        ProgramTrack::Fitness => "de entrenamiento",
    };
    format!(
        "Programa {track_label} personalizado diseñado específicamente para {primary_goal} \
         adaptado a tu nivel {} y preferencias individuales. \
         Incluye progresión estructurada, contenido curado y seguimiento inteligente.",
        request.user_profile.experience_level
    )
}
