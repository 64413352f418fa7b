//! Masonry Grid Component
//!
//! Balanced columns of pins with per-pin first-visibility reporting and an
//! end-of-grid sentinel that asks the caller for more.
//!
//! Layout is recomputed wholesale whenever the pin list or the column count
//! changes. If the browser lacks IntersectionObserver every pin counts as
//! visible on mount and the sentinel counts as visible whenever shown.

use std::collections::HashSet;

use leptos::html;
use leptos::prelude::*;
use leptos_masonry::{
    assign_columns, use_viewport, Column, Intersection, SentinelTrigger, ViewportObserver,
    VisibilityTracker,
};
use web_sys::Element;

use crate::components::PinCard;
use crate::context::use_app_context;
use crate::models::{Pin, PinId};

/// Shared per-grid handles passed down to each pin slot
#[derive(Clone, Copy)]
struct GridRegistry {
    tracker: StoredValue<VisibilityTracker<PinId>>,
    observer: StoredValue<Option<ViewportObserver>, LocalStorage>,
    on_item_visible: Callback<PinId>,
}

impl GridRegistry {
    fn attach(&self, key: &PinId, el: &Element) {
        let needs_watch = self
            .tracker
            .try_update_value(|t| t.observe(key.clone()))
            .unwrap_or(false);
        if !needs_watch {
            return;
        }

        let observed = self
            .observer
            .try_with_value(|o| o.as_ref().map(|o| o.observe(el)).is_some())
            .unwrap_or(false);
        if observed {
            return;
        }

        // Fail open
        let first = self
            .tracker
            .try_update_value(|t| t.force_visible(key.clone()))
            .unwrap_or(false);
        if first {
            self.on_item_visible.run(key.clone());
        }
    }

    fn detach(&self, el: &Element) {
        self.observer.try_with_value(|o| {
            if let Some(o) = o {
                o.unobserve(el);
            }
        });
    }

    fn deliver(&self, hit: Intersection) {
        let Some(raw) = hit.target.get_attribute("data-pin-id") else {
            return;
        };
        let key = PinId(raw);
        let first = self
            .tracker
            .try_update_value(|t| t.report(&key, hit.in_view))
            .unwrap_or(false);
        if first {
            self.on_item_visible.run(key);
        }
    }
}

#[component]
fn PinSlot(pin: Pin, registry: GridRegistry) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let mounted = StoredValue::new_local(None::<Element>);
    let key = pin.id.clone();

    Effect::new(move |_| {
        if let Some(div) = node.get() {
            let el: Element = div.into();
            registry.attach(&key, &el);
            mounted.set_value(Some(el));
        }
    });

    on_cleanup(move || {
        if let Some(el) = mounted.try_update_value(|m| m.take()).flatten() {
            registry.detach(&el);
        }
    });

    let pin_id = pin.id.to_string();
    view! {
        <div class="masonry-item" data-pin-id=pin_id node_ref=node>
            <PinCard pin=pin />
        </div>
    }
}

#[component]
pub fn MasonryGrid(
    /// Pins in feed order
    #[prop(into)]
    items: Signal<Vec<Pin>>,
    /// Called once per pin, the first time it is on screen
    on_item_visible: Callback<PinId>,
    /// Called each time the sentinel enters the viewport
    on_load_more: Callback<()>,
    /// Caller hides the sentinel once the feed is exhausted
    #[prop(into, default = Signal::stored(true))]
    show_sentinel: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let grid = ctx.config.grid.clone();

    let viewport = use_viewport(grid.resize_debounce_ms);
    let breakpoints = grid.breakpoints.clone();
    let column_count = Memo::new(move |_| breakpoints.columns_for(viewport.get().width));

    let columns = Memo::new(move |_| {
        let count = column_count.get();
        items.with(|pins| match assign_columns(pins, count) {
            Ok(columns) => columns,
            Err(e) => {
                log::error!("[Grid] {}, falling back to one column", e);
                assign_columns(pins, 1).unwrap_or_default()
            }
        })
    });

    // Visibility tracking
    let tracker = StoredValue::new(VisibilityTracker::<PinId>::new());
    let item_observer = StoredValue::new_local(None::<ViewportObserver>);
    let registry = GridRegistry {
        tracker,
        observer: item_observer,
        on_item_visible,
    };
    match ViewportObserver::new(&grid.item_observer, move |hit| registry.deliver(hit)) {
        Ok(observer) => item_observer.set_value(Some(observer)),
        Err(e) => log::warn!("[Grid] {}; treating every pin as visible", e),
    }

    // Pins that left the feed need no more watching
    Effect::new(move |_| {
        let current: HashSet<PinId> = items.with(|pins| pins.iter().map(|p| p.id.clone()).collect());
        tracker.try_update_value(|t| t.retain_pending(|k| current.contains(k)));
    });

    // End-of-grid sentinel
    let sentinel = StoredValue::new(SentinelTrigger::new());
    let sentinel_ref = NodeRef::<html::Div>::new();
    let sentinel_el = StoredValue::new_local(None::<Element>);
    let sentinel_observer = StoredValue::new_local(None::<ViewportObserver>);

    let on_sentinel = move |hit: Intersection| {
        let fire = sentinel.try_update_value(|s| s.report(hit.in_view)).unwrap_or(false);
        if fire {
            log::debug!("[Grid] Sentinel entered viewport");
            on_load_more.run(());
        }
    };
    match ViewportObserver::new(&grid.sentinel_observer, on_sentinel) {
        Ok(observer) => sentinel_observer.set_value(Some(observer)),
        Err(e) => log::warn!("[Grid] {}; sentinel counts as visible while shown", e),
    }

    Effect::new(move |_| {
        if let Some(div) = sentinel_ref.get() {
            let el: Element = div.into();
            sentinel_observer.with_value(|o| {
                if let Some(o) = o {
                    o.observe(&el);
                }
            });
            sentinel_el.set_value(Some(el));
        }
    });

    // After the grid grows or the sentinel is shown again, the sentinel may
    // still be on screen without crossing a threshold; re-arm and re-observe
    // so the browser reports its current position.
    Effect::new(move |_| {
        let _ = items.with(|pins| pins.len());
        let shown = show_sentinel.get();
        sentinel.try_update_value(|s| s.rearm());

        let has_observer = sentinel_observer
            .try_with_value(|o| o.is_some())
            .unwrap_or(false);
        if has_observer {
            sentinel_el.with_value(|el| {
                if let Some(el) = el {
                    sentinel_observer.with_value(|o| {
                        if let Some(o) = o {
                            o.unobserve(el);
                            o.observe(el);
                        }
                    });
                }
            });
        } else if shown && sentinel.try_update_value(|s| s.report(true)).unwrap_or(false) {
            on_load_more.run(());
        }
    });

    // Teardown: nothing may reach the caller after this
    on_cleanup(move || {
        tracker.try_update_value(|t| t.disconnect());
        sentinel.try_update_value(|s| s.disconnect());
        item_observer.try_update_value(|o| o.take());
        sentinel_observer.try_update_value(|o| o.take());
        sentinel_el.try_set_value(None);
    });

    let column_view = move |idx: usize| {
        let column_items = move || {
            columns.with(|cols| {
                cols.get(idx)
                    .map(|c: &Column<Pin>| c.items.clone())
                    .unwrap_or_default()
            })
        };
        view! {
            <div class="masonry-column">
                <For
                    each=column_items
                    key=|pin| pin.id.clone()
                    children=move |pin| view! { <PinSlot pin=pin registry=registry /> }
                />
            </div>
        }
    };

    view! {
        <div
            class="masonry-grid"
            style=move || format!("--masonry-columns: {}", column_count.get())
        >
            <For
                each={move || (0..column_count.get()).collect::<Vec<_>>()}
                key=|idx| *idx
                children=column_view
            />
            <div
                class="masonry-sentinel"
                aria-hidden="true"
                hidden=move || !show_sentinel.get()
                node_ref=sentinel_ref
            />
        </div>
    }
}
