// ABOUTME: Program generation module: classification, planning, and presentation
// ABOUTME: Splits deterministic selection logic from the randomized presentation shuffle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

/// Static name, content, phase, and metric tables
pub mod catalog;
/// Program type, name pool, and duration rules
pub mod classifier;
/// Seeded presentation and the `ProgramGenerator`
pub mod generator;
/// Deterministic week, metric, and text planning
pub mod planner;

pub use catalog::{NamePool, Phase};
pub use classifier::{classify, estimate_duration_weeks, name_pool, GoalCounts};
pub use generator::{present, ProgramGenerator, CONTENT_PER_WEEK};
pub use planner::{plan_program, PlannedWeek, ProgramPlan, MAX_SUCCESS_METRICS, WEEKLY_DETAIL_HORIZON};
