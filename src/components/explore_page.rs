//! Explore Page Component
//!
//! Drives the paged feed for the active category and hands pins to the grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FeedSource;
use crate::components::MasonryGrid;
use crate::context::use_app_context;
use crate::feed::{FeedState, ALL_CATEGORY, PREFETCH_WINDOW};
use crate::models::PinId;
use crate::store::{store_mark_seen, use_app_store, AppStateStoreFields};

#[component]
pub fn ExplorePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let reload_trigger = ctx.reload_trigger;

    let source = FeedSource::from_config(&ctx.config);
    let feed = RwSignal::new(FeedState::new(ALL_CATEGORY, ctx.config.page_size, source.max_pages()));
    let source = StoredValue::new_local(source);

    // Issue the next page fetch unless one is already running
    let load_more = Callback::new(move |_: ()| {
        let Some(request) = feed.try_update(|f| f.begin_load()).flatten() else {
            return;
        };
        let Some(source) = source.try_get_value() else {
            return;
        };
        log::info!("[Explore] Loading {} page {}", request.category, request.page);

        spawn_local(async move {
            match source.fetch_page(&request).await {
                Ok(pins) => {
                    let count = pins.len();
                    let applied = feed.try_update(|f| f.complete(&request, pins)).unwrap_or(false);
                    if applied {
                        log::debug!("[Explore] Page {} returned {} pins", request.page, count);
                    } else {
                        log::debug!("[Explore] Dropped stale page {} of {}", request.page, request.category);
                    }
                }
                Err(e) => {
                    log::error!("[Explore] Page {} failed: {}", request.page, e);
                    feed.try_update(|f| f.fail(&request, e.to_string()));
                }
            }
        });
    });

    let on_item_visible = Callback::new(move |id: PinId| {
        store_mark_seen(&store);
        log::debug!("[Explore] Pin {} visible", id);
        if feed.with_untracked(|f| f.is_near_end(&id, PREFETCH_WINDOW)) {
            load_more.run(());
        }
    });

    // Restart from page 0 on category change or reload
    Effect::new(move |_| {
        let category = store.category().get();
        let _ = reload_trigger.get();
        log::info!("[Explore] Showing {}", category);
        feed.update(|f| f.reset(&category));
        load_more.run(());
    });

    let items = Memo::new(move |_| feed.with(|f| f.pins().to_vec()));
    let is_loading = Memo::new(move |_| feed.with(|f| f.is_loading()));
    let error = Memo::new(move |_| feed.with(|f| f.error().map(str::to_string)));
    let exhausted = Memo::new(move |_| feed.with(|f| !f.has_more() && !f.pins().is_empty()));
    let is_empty = Memo::new(move |_| {
        feed.with(|f| !f.has_more() && f.pins().is_empty() && f.error().is_none())
    });
    let show_sentinel = Signal::derive(move || feed.with(|f| f.has_more() && f.error().is_none()));

    let retry = move |_| {
        feed.update(|f| f.clear_error());
        load_more.run(());
    };

    view! {
        <section class="explore-page">
            <MasonryGrid
                items=items
                on_item_visible=on_item_visible
                on_load_more=load_more
                show_sentinel=show_sentinel
            />

            <Show when=move || is_loading.get()>
                <div class="feed-status loading">"Loading more pins..."</div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="feed-status error" role="alert">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="retry-btn" on:click=retry>"Try again"</button>
                </div>
            </Show>

            <Show when=move || exhausted.get()>
                <div class="feed-status end">"You've reached the end"</div>
            </Show>

            <Show when=move || is_empty.get()>
                <div class="feed-status empty">"No pins in this category yet"</div>
            </Show>

            <p class="feed-count">
                {move || format!("{} of {} pins seen", store.seen_pins().get(), items.with(|p| p.len()))}
            </p>
        </section>
    }
}
