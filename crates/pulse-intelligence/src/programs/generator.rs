// ABOUTME: Randomized presentation layer of program generation
// ABOUTME: Picks the program name and weekly content titles from an injectable RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use super::catalog;
use super::planner::{self, ProgramPlan};
use pulse_core::models::{
    AIGeneratedProgram, GenerateProgramRequest, ProgramGoals, ProgramPreferences, WeeklyPlan,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Content titles attached to each week
pub const CONTENT_PER_WEEK: usize = 3;

/// Turn a plan into a program, drawing the randomized parts from `rng`
pub fn present<R: Rng + ?Sized>(
    plan: ProgramPlan,
    request: &GenerateProgramRequest,
    rng: &mut R,
) -> AIGeneratedProgram {
    let program_name = plan
        .name_pool
        .names()
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_owned();

    let titles = catalog::content_recommendations(plan.track);
    let weekly_structure = plan
        .weeks
        .into_iter()
        .map(|week| WeeklyPlan {
            week: week.week,
            focus: week.focus.to_owned(),
            milestones: week.milestones.iter().map(|m| (*m).to_owned()).collect(),
            content_recommendations: titles
                .choose_multiple(rng, CONTENT_PER_WEEK)
                .map(|title| (*title).to_owned())
                .collect(),
        })
        .collect();

    AIGeneratedProgram {
        program_name,
        program_type: plan.program_type,
        program_description: plan.program_description,
        estimated_duration_weeks: plan.estimated_duration_weeks,
        goals: ProgramGoals {
            primary_goals: request.goals.clone(),
            success_factors: request.goals.iter().map(|g| g.label.clone()).collect(),
        },
        preferences: ProgramPreferences {
            values: request.preferences.clone(),
            user_profile: request.user_profile.clone(),
        },
        weekly_structure,
        success_metrics: plan.success_metrics,
        ai_rationale: plan.ai_rationale,
    }
}

/// Program generator owning its random source.
///
/// Seeded generators are reproducible: two generators built with the same
/// seed produce identical programs for identical requests.
#[derive(Debug, Clone)]
pub struct ProgramGenerator {
    rng: ChaCha8Rng,
}

impl ProgramGenerator {
    /// Generator with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a program for `request`
    pub fn generate(&mut self, request: &GenerateProgramRequest) -> AIGeneratedProgram {
        let plan = planner::plan_program(request);
        debug!(
            user_id = %request.user_id,
            program_type = %plan.program_type,
            weeks = plan.estimated_duration_weeks,
            "Planned program"
        );
        present(plan, request, &mut self.rng)
    }

    /// Draw a value in `[min, max]` from the generator's RNG
    pub fn sample_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

impl Default for ProgramGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
