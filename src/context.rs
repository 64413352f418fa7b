//! Application Context
//!
//! Process-wide values provided once at the root via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide configuration and signals provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Startup configuration, shared read-only
    pub config: Arc<AppConfig>,
    /// Bumped to restart the feed from page 0 - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to restart the feed from page 0 - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            config: Arc::new(config),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Restart the feed
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
