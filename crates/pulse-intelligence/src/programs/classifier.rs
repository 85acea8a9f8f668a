// ABOUTME: Goal-category classification for generated programs
// ABOUTME: Derives program type, name pool, and declared duration from the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use super::catalog::NamePool;
use pulse_core::models::{GoalCategory, ProgramGoal, ProgramTrack, ProgramType, UserProfile};

/// Default declared duration
pub const DEFAULT_DURATION_WEEKS: u32 = 8;
/// Declared duration for nutrition programs and beginners
pub const EXTENDED_DURATION_WEEKS: u32 = 12;
/// Declared duration for requests with many goals
pub const LONG_DURATION_WEEKS: u32 = 16;
/// Goal count above which the long duration applies
pub const MANY_GOALS_THRESHOLD: usize = 2;

/// Number of goals in each category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalCounts {
    /// Fitness goals
    pub fitness: usize,
    /// Wellness goals
    pub wellness: usize,
    /// Longevity goals
    pub longevity: usize,
    /// Nutrition goals
    pub nutrition: usize,
}

impl GoalCounts {
    /// Tally goals by category
    #[must_use]
    pub fn tally(goals: &[ProgramGoal]) -> Self {
        goals.iter().fold(Self::default(), |mut counts, goal| {
            match goal.category {
                GoalCategory::Fitness => counts.fitness += 1,
                GoalCategory::Wellness => counts.wellness += 1,
                GoalCategory::Longevity => counts.longevity += 1,
                GoalCategory::Nutrition => counts.nutrition += 1,
                GoalCategory::Other => {}
            }
            counts
        })
    }
}

/// Classify a request.
///
/// Precedence: the nutrition track always yields `NUTRITION`; longevity mixed
/// with fitness or nutrition yields `HYBRID`; longevity alone `LONGEVITY`;
/// fitness mixed with wellness or nutrition `PRIME`; anything else `CUSTOM`.
#[must_use]
pub fn classify(track: ProgramTrack, goals: &[ProgramGoal]) -> ProgramType {
    if track.is_nutrition() {
        return ProgramType::Nutrition;
    }

    let counts = GoalCounts::tally(goals);
    if counts.longevity > 0 && (counts.fitness > 0 || counts.nutrition > 0) {
        ProgramType::Hybrid
    } else if counts.longevity > 0 {
        ProgramType::Longevity
    } else if counts.fitness > 0 && (counts.wellness > 0 || counts.nutrition > 0) {
        ProgramType::Prime
    } else {
        ProgramType::Custom
    }
}

/// Pick the pool the program name is drawn from
#[must_use]
pub fn name_pool(track: ProgramTrack, goals: &[ProgramGoal]) -> NamePool {
    if track.is_nutrition() {
        return NamePool::Nutrition;
    }

    let counts = GoalCounts::tally(goals);
    if counts.longevity > 0 {
        NamePool::Longevity
    } else if counts.wellness > counts.fitness {
        NamePool::Wellness
    } else {
        NamePool::Fitness
    }
}

/// Declared program duration in weeks
#[must_use]
pub fn estimate_duration_weeks(
    track: ProgramTrack,
    goals: &[ProgramGoal],
    profile: &UserProfile,
) -> u32 {
    if track.is_nutrition() || profile.experience_level == "beginner" {
        EXTENDED_DURATION_WEEKS
    } else if goals.len() > MANY_GOALS_THRESHOLD {
        LONG_DURATION_WEEKS
    } else {
        DEFAULT_DURATION_WEEKS
    }
}
