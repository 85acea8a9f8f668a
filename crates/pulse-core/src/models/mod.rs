// ABOUTME: Core data models shared across NGX Pulse crates
// ABOUTME: Program generation, AI coach messages, and auth sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

/// Auth session and user models
pub mod auth;
/// AI coach message model
pub mod coach_message;
/// Program generation models
pub mod program;

pub use auth::{AuthEvent, AuthSession, AuthUser, SignInData, SignUpData};
pub use coach_message::{AICoachMessage, CoachMessageType, Urgency};
pub use program::{
    AIGeneratedProgram, GenerateProgramRequest, GenerateProgramResponse, GoalCategory,
    ProgramGoal, ProgramGoals, ProgramPreferences, ProgramTrack, ProgramType, UserProfile,
    WeeklyPlan,
};
