//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::feed::ALL_CATEGORY;

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active explore category
    pub category: String,
    /// Pins reported visible at least once
    pub seen_pins: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch category; no-op if unchanged so the feed is not restarted
pub fn store_set_category(store: &AppStore, category: &str) {
    if store.category().get_untracked() != category {
        *store.category().write() = category.to_string();
    }
}

/// Count one first-time pin visibility
pub fn store_mark_seen(store: &AppStore) {
    *store.seen_pins().write() += 1;
}
