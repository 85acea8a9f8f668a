// ABOUTME: Key-value storage abstraction standing in for browser local storage
// ABOUTME: Pluggable backends (in-memory, JSON file) behind one injectable trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! # Storage
//!
//! Sidebar state, demo sessions, and the trial start date all persist through
//! [`KeyValueStore`]. Values are strings, as in browser storage; typed access
//! goes through the JSON helpers on `dyn KeyValueStore`.
//!
//! ```rust
//! use ngx_pulse::storage::{KeyValueStore, memory::InMemoryStore};
//! use std::sync::Arc;
//! # fn example() -> ngx_pulse::errors::AppResult<()> {
//! let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
//! store.set_json("ngx-sidebar-collapsed", &true)?;
//! assert_eq!(store.get_json::<bool>("ngx-sidebar-collapsed")?, Some(true));
//! # Ok(())
//! # }
//! ```

/// Backend selection from configuration
pub mod factory;
/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// String key-value store with browser-storage semantics
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove_item(&self, key: &str) -> AppResult<()>;

    /// Remove every key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn clear(&self) -> AppResult<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}

impl<'a> dyn KeyValueStore + 'a {
    /// Read and deserialize a JSON value.
    ///
    /// A stored value that does not parse is treated as absent and logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.get_item(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring unparseable stored value");
                Ok(None)
            }
        }
    }

    /// Serialize a value as JSON and store it
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }
}
