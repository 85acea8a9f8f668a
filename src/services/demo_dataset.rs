// ABOUTME: Staging demo dataset loaded from a fixture file or embedded defaults
// ABOUTME: Users, coach messages, and health metrics kept as schemaless JSON records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::config::DemoDataConfig;
use crate::constants::staging_user;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Record counts reported by the status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetCounts {
    /// Users
    pub users: usize,
    /// Coach messages
    pub messages: usize,
    /// Health metric rows
    pub health_records: usize,
}

/// Mock records served in staging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoDataset {
    /// User records
    #[serde(default)]
    pub users: Vec<Value>,
    /// Coach message records
    #[serde(default)]
    pub ai_coach_messages: Vec<Value>,
    /// Daily health metric records
    #[serde(default)]
    pub health_metrics: Vec<Value>,
}

impl DemoDataset {
    /// Dataset for the given settings: empty when demo mode is off
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file exists but is not a valid dataset
    pub fn for_config(config: &DemoDataConfig) -> AppResult<Self> {
        if !config.enabled {
            return Ok(Self::default());
        }
        let dataset = config
            .data_path
            .as_deref()
            .map_or_else(|| Ok(Self::embedded()), Self::load)?;
        info!(counts = ?dataset.summary(), "Loaded demo dataset");
        Ok(dataset)
    }

    /// Load a fixture, falling back to the embedded dataset when the file is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "Demo fixture not found, using embedded dataset");
            return Ok(Self::embedded());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::serialization(format!("Invalid demo fixture {}: {e}", path.display()))
        })
    }

    /// Minimal built-in dataset
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            users: vec![json!({
                "id": staging_user::ID,
                "email": staging_user::EMAIL,
                "name": "Demo User"
            })],
            ai_coach_messages: vec![json!({
                "id": "msg-001",
                "user_id": staging_user::ID,
                "title": "Bienvenido a Nexus Pulse",
                "body": "Este entorno es solo para demostración con datos simulados.",
                "message_type": "INFO",
                "urgency": "LOW",
                "created_at": "2024-01-01T10:00:00Z",
                "deep_link": null,
                "read_at": null
            })],
            health_metrics: vec![json!({
                "user_id": staging_user::ID,
                "date": "2024-01-01",
                "steps": 10432,
                "sleep_hours": 7.2,
                "resting_heart_rate": 62,
                "calories_burned": 2140
            })],
        }
    }

    /// Record counts
    #[must_use]
    pub fn summary(&self) -> DatasetCounts {
        DatasetCounts {
            users: self.users.len(),
            messages: self.ai_coach_messages.len(),
            health_records: self.health_metrics.len(),
        }
    }

    /// Records belonging to `user_id`
    #[must_use]
    pub fn for_user(&self, user_id: &str) -> Self {
        Self {
            users: self.users.iter().filter(owned_by("id", user_id)).cloned().collect(),
            ai_coach_messages: self
                .ai_coach_messages
                .iter()
                .filter(owned_by("user_id", user_id))
                .cloned()
                .collect(),
            health_metrics: self
                .health_metrics
                .iter()
                .filter(owned_by("user_id", user_id))
                .cloned()
                .collect(),
        }
    }
}

fn owned_by<'a>(field: &'a str, user_id: &'a str) -> impl Fn(&&Value) -> bool + 'a {
    move |record: &&Value| record.get(field).and_then(Value::as_str) == Some(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_disabled_mode_is_empty() {
        let dataset = DemoDataset::for_config(&DemoDataConfig::default()).unwrap();
        assert_eq!(
            dataset.summary(),
            DatasetCounts {
                users: 0,
                messages: 0,
                health_records: 0
            }
        );
    }

    #[test]
    fn test_enabled_without_path_uses_embedded() {
        let config = DemoDataConfig {
            enabled: true,
            data_path: None,
        };
        let dataset = DemoDataset::for_config(&config).unwrap();
        assert_eq!(dataset.summary().users, 1);
        assert_eq!(dataset.health_metrics[0]["steps"], 10432);
    }

    #[test]
    fn test_loads_partial_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"users":[{{"id":"u1"}}]}}"#).unwrap();
        let dataset = DemoDataset::load(file.path()).unwrap();
        assert_eq!(dataset.summary().users, 1);
        assert_eq!(dataset.summary().messages, 0);
    }

    #[test]
    fn test_missing_fixture_falls_back() {
        let dataset = DemoDataset::load(&PathBuf::from("/nonexistent/staging.json")).unwrap();
        assert_eq!(dataset, DemoDataset::embedded());
    }

    #[test]
    fn test_for_user_filters_every_collection() {
        let embedded = DemoDataset::embedded();
        assert_eq!(embedded.for_user("demo-user-1"), embedded);
        assert_eq!(embedded.for_user("someone-else").summary().health_records, 0);
    }
}
