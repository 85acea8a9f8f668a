// ABOUTME: Integration tests for the persisted sidebar state
// ABOUTME: Toggle persistence across reloads and the provider-required context access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use ngx_pulse::constants::storage_keys::SIDEBAR_COLLAPSED;
use ngx_pulse::sidebar::{SidebarState, UiContext};
use ngx_pulse::storage::file::JsonFileStore;
use ngx_pulse::storage::KeyValueStore;
use std::sync::Arc;

#[test]
fn test_toggle_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).unwrap());
        let sidebar = SidebarState::mount(store).unwrap();
        assert!(!sidebar.is_collapsed());
        assert!(sidebar.toggle().unwrap());
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(
        store.get_item(SIDEBAR_COLLAPSED).unwrap().as_deref(),
        Some("true")
    );
    let sidebar = SidebarState::mount(store).unwrap();
    assert!(sidebar.is_collapsed());
}

#[test]
fn test_garbage_value_mounts_expanded() {
    let store = common::memory_store();
    store.set_item(SIDEBAR_COLLAPSED, "not-json").unwrap();

    let sidebar = SidebarState::mount(Arc::clone(&store)).unwrap();
    assert!(!sidebar.is_collapsed());

    sidebar.collapse().unwrap();
    sidebar.collapse().unwrap();
    assert!(sidebar.is_collapsed());
    sidebar.expand().unwrap();
    assert_eq!(
        store.get_item(SIDEBAR_COLLAPSED).unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn test_context_requires_provider() {
    let err = UiContext::new().use_sidebar().unwrap_err();
    assert_eq!(
        err.message,
        "use_sidebar must be used within a SidebarProvider"
    );

    let context = UiContext::new()
        .with_sidebar(common::memory_store())
        .unwrap();
    let first = context.use_sidebar().unwrap();
    first.toggle().unwrap();
    assert!(context.use_sidebar().unwrap().is_collapsed());
}
