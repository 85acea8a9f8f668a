// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Returns an injectable KeyValueStore handle shared by UI state and auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use super::{file::JsonFileStore, memory::InMemoryStore, KeyValueStore};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Which storage backend to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Volatile in-memory storage
    #[default]
    Memory,
    /// JSON file at the given path
    File {
        /// Backing file
        path: PathBuf,
    },
}

impl StorageConfig {
    /// File storage at the platform default path
    #[must_use]
    pub fn default_file() -> Self {
        Self::File {
            path: JsonFileStore::default_path(),
        }
    }
}

/// Build the configured store
///
/// # Errors
///
/// Returns an error if a file store cannot be opened
pub fn create_store(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config {
        StorageConfig::Memory => Arc::new(InMemoryStore::new()),
        StorageConfig::File { path } => Arc::new(JsonFileStore::open(path.clone())?),
    };
    info!("Initialized {} storage backend", store.backend_name());
    Ok(store)
}
