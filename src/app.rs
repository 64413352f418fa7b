//! Inspira Frontend App
//!
//! Root component: provides configuration and state, lays out the explore view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryBar, ExplorePage, Header};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!(
        "[APP] Starting with {} (page size {})",
        config.api_base_url.as_deref().unwrap_or("sample feed"),
        config.page_size
    );

    // Provide context to all children
    provide_context(AppContext::new(config, signal(0u32)));
    provide_context(Store::new(AppState::new()));

    view! {
        <div class="app-layout">
            <Header />
            <CategoryBar />
            <main class="main-content">
                <ExplorePage />
            </main>
        </div>
    }
}
