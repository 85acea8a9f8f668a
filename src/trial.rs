// ABOUTME: Trial period tracking persisted in key-value storage
// ABOUTME: Starts the trial on first check and computes the days remaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::storage_keys::TRIAL_STARTED_AT;
use crate::errors::AppResult;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Snapshot of the trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialStatus {
    /// When the trial began
    pub started_at: DateTime<Utc>,
    /// Whole days left, never negative
    pub days_remaining: u32,
    /// No days left
    pub expired: bool,
}

/// Reads and starts the trial clock
pub struct TrialTracker {
    store: Arc<dyn KeyValueStore>,
}

impl TrialTracker {
    /// Tracker over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Trial status as of now
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written
    pub fn status(&self, trial_length_days: u32) -> AppResult<TrialStatus> {
        self.status_at(trial_length_days, Utc::now())
    }

    /// Trial status as of `now`.
    ///
    /// A missing or unparseable start timestamp starts the trial at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written
    pub fn status_at(&self, trial_length_days: u32, now: DateTime<Utc>) -> AppResult<TrialStatus> {
        let started_at = match self.started_at()? {
            Some(started_at) => started_at,
            None => {
                self.store.set_item(TRIAL_STARTED_AT, &now.to_rfc3339())?;
                info!(started_at = %now, "Started trial");
                now
            }
        };

        let elapsed_days = (now - started_at).num_days().max(0);
        let days_remaining = u32::try_from(i64::from(trial_length_days) - elapsed_days)
            .unwrap_or(0);

        Ok(TrialStatus {
            started_at,
            days_remaining,
            expired: days_remaining == 0,
        })
    }

    /// Forget the trial start so the next check restarts it
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written
    pub fn reset(&self) -> AppResult<()> {
        self.store.remove_item(TRIAL_STARTED_AT)
    }

    fn started_at(&self) -> AppResult<Option<DateTime<Utc>>> {
        let Some(raw) = self.store.get_item(TRIAL_STARTED_AT)? else {
            return Ok(None);
        };
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(parsed) => Ok(Some(parsed.with_timezone(&Utc))),
            Err(e) => {
                warn!(value = %raw, error = %e, "Discarding unparseable trial start");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryStore;
    use chrono::Duration;

    fn tracker() -> (Arc<dyn KeyValueStore>, TrialTracker) {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        (store.clone(), TrialTracker::new(store))
    }

    #[test]
    fn test_first_check_starts_trial() {
        let (store, tracker) = tracker();
        let now = Utc::now();
        let status = tracker.status_at(30, now).unwrap();
        assert_eq!(status.days_remaining, 30);
        assert!(!status.expired);
        assert!(store.get_item(TRIAL_STARTED_AT).unwrap().is_some());
    }

    #[test]
    fn test_partial_days_round_down_elapsed() {
        let (_store, tracker) = tracker();
        let start = Utc::now();
        tracker.status_at(30, start).unwrap();
        let later = start + Duration::days(3) + Duration::hours(23);
        assert_eq!(tracker.status_at(30, later).unwrap().days_remaining, 27);
    }

    #[test]
    fn test_expired_trial_never_goes_negative() {
        let (_store, tracker) = tracker();
        let start = Utc::now();
        tracker.status_at(7, start).unwrap();
        let status = tracker.status_at(7, start + Duration::days(40)).unwrap();
        assert_eq!(status.days_remaining, 0);
        assert!(status.expired);
    }

    #[test]
    fn test_unparseable_start_restarts_trial() {
        let (store, tracker) = tracker();
        store.set_item(TRIAL_STARTED_AT, "yesterday").unwrap();
        let now = Utc::now();
        let status = tracker.status_at(30, now).unwrap();
        assert_eq!(status.started_at, now);
    }
}
