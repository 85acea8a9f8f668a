// ABOUTME: Program generation request and response models
// ABOUTME: Goals, user profile, weekly structure, and the generated program payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Category attached to a goal; drives classification and naming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Training-oriented goals (strength, endurance, weight loss)
    Fitness,
    /// Stress, energy, and general well-being goals
    Wellness,
    /// Healthy ageing and prevention goals
    Longevity,
    /// Diet-oriented goals
    Nutrition,
    /// Anything else; counted toward no bucket
    #[serde(other)]
    Other,
}

/// A tagged objective supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramGoal {
    /// Stable goal identifier, e.g. `weight_loss`
    pub id: String,
    /// Display label
    pub label: String,
    /// Goal category
    pub category: GoalCategory,
}

impl ProgramGoal {
    /// Convenience constructor
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: GoalCategory) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category,
        }
    }
}

/// Requested program track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramTrack {
    /// Training program
    Fitness,
    /// Nutrition program
    Nutrition,
}

impl ProgramTrack {
    /// Whether this is the nutrition track
    #[must_use]
    pub const fn is_nutrition(self) -> bool {
        matches!(self, Self::Nutrition)
    }
}

/// Classification of a generated program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProgramType {
    /// Fitness combined with wellness or nutrition
    Prime,
    /// Longevity goals only
    Longevity,
    /// Nutrition track
    Nutrition,
    /// No recognised combination
    Custom,
    /// Longevity combined with fitness or nutrition
    Hybrid,
}

impl ProgramType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prime => "PRIME",
            Self::Longevity => "LONGEVITY",
            Self::Nutrition => "NUTRITION",
            Self::Custom => "CUSTOM",
            Self::Hybrid => "HYBRID",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported profile used to size and word the program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// `beginner`, `intermediate`, `advanced`, ...
    pub experience_level: String,
    /// Free-text health constraints
    #[serde(default)]
    pub health_conditions: String,
    /// Free-text time availability
    #[serde(default)]
    pub time_availability: String,
    /// Free-text equipment access
    #[serde(default)]
    pub equipment_access: String,
    /// Free-text motivation factors
    #[serde(default)]
    pub motivation_factors: String,
}

/// Input to program generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateProgramRequest {
    /// Requested track
    pub program_type: ProgramTrack,
    /// Ordered goals; the first is the primary goal
    pub goals: Vec<ProgramGoal>,
    /// Free-form preference mapping
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,
    /// Caller profile
    pub user_profile: UserProfile,
    /// Requesting user
    pub user_id: String,
}

/// One week of the generated structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// 1-based week number
    pub week: u32,
    /// Phase focus text
    pub focus: String,
    /// Phase milestones
    pub milestones: Vec<String>,
    /// Sampled content titles
    pub content_recommendations: Vec<String>,
}

/// Goals echoed back on the generated program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramGoals {
    /// Goals as supplied
    pub primary_goals: Vec<ProgramGoal>,
    /// Goal labels
    pub success_factors: Vec<String>,
}

/// Preferences echoed back together with the user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramPreferences {
    /// Caller preferences, flattened into the object
    #[serde(flatten)]
    pub values: BTreeMap<String, String>,
    /// Caller profile
    pub user_profile: UserProfile,
}

/// Generated program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub struct AIGeneratedProgram {
    /// Display name
    pub program_name: String,
    /// Classification
    pub program_type: ProgramType,
    /// Description paragraph
    pub program_description: String,
    /// Declared duration; may exceed the number of weekly entries
    pub estimated_duration_weeks: u32,
    /// Echoed goals
    pub goals: ProgramGoals,
    /// Echoed preferences
    pub preferences: ProgramPreferences,
    /// Week-indexed structure
    pub weekly_structure: Vec<WeeklyPlan>,
    /// Success metrics (at most five)
    pub success_metrics: Vec<String>,
    /// Rationale paragraph
    pub ai_rationale: String,
}

/// Envelope returned by the program generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateProgramResponse {
    /// Whether generation succeeded
    pub success: bool,
    /// Program, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AIGeneratedProgram>,
    /// Error message, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateProgramResponse {
    /// Successful envelope
    #[must_use]
    pub const fn ok(program: AIGeneratedProgram) -> Self {
        Self {
            success: true,
            data: Some(program),
            error: None,
        }
    }

    /// Failed envelope
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_goal_category_deserializes_as_other() {
        let goal: ProgramGoal =
            serde_json::from_str(r#"{"id":"x","label":"X","category":"sleep"}"#).unwrap();
        assert_eq!(goal.category, GoalCategory::Other);
    }

    #[test]
    fn test_preferences_flatten_with_profile() {
        let mut values = BTreeMap::new();
        values.insert("workout_type".to_owned(), "Fuerza".to_owned());
        let prefs = ProgramPreferences {
            values,
            user_profile: UserProfile {
                experience_level: "beginner".to_owned(),
                ..UserProfile::default()
            },
        };
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["workout_type"], "Fuerza");
        assert_eq!(json["user_profile"]["experience_level"], "beginner");
    }

    #[test]
    fn test_program_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&ProgramType::Hybrid).unwrap(),
            "\"HYBRID\""
        );
        assert_eq!(ProgramType::Prime.to_string(), "PRIME");
    }
}
