// ABOUTME: Persisted sidebar collapsed/expanded state and its UI context
// ABOUTME: Reads the flag from storage on mount and writes it back on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Sidebar state.
//!
//! The flag lives in a [`SidebarState`] mounted into a [`UiContext`]. Consumers
//! reach it through [`UiContext::use_sidebar`], which fails when no sidebar
//! provider was mounted.

use crate::constants::storage_keys::SIDEBAR_COLLAPSED;
use crate::errors::{AppError, AppResult};
use crate::storage::KeyValueStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Collapsed flag bound to a storage backend
pub struct SidebarState {
    store: Arc<dyn KeyValueStore>,
    collapsed: AtomicBool,
}

impl std::fmt::Debug for SidebarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SidebarState")
            .field("collapsed", &self.is_collapsed())
            .finish_non_exhaustive()
    }
}

impl SidebarState {
    /// Mount the sidebar, restoring the last persisted value.
    ///
    /// A missing or unparseable value starts expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written
    pub fn mount(store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let collapsed = store.get_json::<bool>(SIDEBAR_COLLAPSED)?.unwrap_or(false);
        let state = Self {
            store,
            collapsed: AtomicBool::new(collapsed),
        };
        state.persist(collapsed)?;
        debug!(collapsed, "Mounted sidebar state");
        Ok(state)
    }

    /// Whether the sidebar is collapsed
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.load(Ordering::SeqCst)
    }

    /// Flip the flag and return the new value
    ///
    /// # Errors
    ///
    /// Returns an error if the new value cannot be persisted
    pub fn toggle(&self) -> AppResult<bool> {
        let collapsed = !self.is_collapsed();
        self.set(collapsed)?;
        Ok(collapsed)
    }

    /// Collapse the sidebar
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted
    pub fn collapse(&self) -> AppResult<()> {
        self.set(true)
    }

    /// Expand the sidebar
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted
    pub fn expand(&self) -> AppResult<()> {
        self.set(false)
    }

    fn set(&self, collapsed: bool) -> AppResult<()> {
        self.persist(collapsed)?;
        self.collapsed.store(collapsed, Ordering::SeqCst);
        Ok(())
    }

    fn persist(&self, collapsed: bool) -> AppResult<()> {
        self.store.set_json(SIDEBAR_COLLAPSED, &collapsed)
    }
}

/// UI-scoped state providers
#[derive(Default)]
pub struct UiContext {
    sidebar: Option<Arc<SidebarState>>,
}

impl UiContext {
    /// Context with no providers mounted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a sidebar provider backed by `store`
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be restored
    pub fn with_sidebar(mut self, store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        self.sidebar = Some(Arc::new(SidebarState::mount(store)?));
        Ok(self)
    }

    /// Access the sidebar state
    ///
    /// # Errors
    ///
    /// Returns `ContextUnavailable` when no sidebar provider is mounted
    pub fn use_sidebar(&self) -> AppResult<Arc<SidebarState>> {
        self.sidebar.clone().ok_or_else(|| {
            AppError::context_unavailable("use_sidebar must be used within a SidebarProvider")
        })
    }
}
