//! App Header Component
//!
//! Brand, feed source and reload.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let source_label = if ctx.config.uses_sample_feed() { "Sample feed" } else { "Live" };

    let reload = move |_| {
        log::info!("[Header] Reload requested");
        ctx.reload();
    };

    view! {
        <header class="app-header">
            <span class="brand">"Inspira"</span>
            <span class="feed-source">{source_label}</span>
            <button class="reload-btn" title="Reload feed" on:click=reload>"↻"</button>
        </header>
    }
}
