//! Window Size Tracking
//!
//! Debounced `resize` / `orientationchange` listener feeding a `Viewport` signal.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::viewport::Viewport;

const EVENTS: [&str; 2] = ["resize", "orientationchange"];

fn current_viewport() -> Viewport {
    let Some(win) = web_sys::window() else {
        return Viewport::default();
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

/// Reactive window size. Updates settle `debounce_ms` after the last event.
/// Listeners are removed when the calling owner is cleaned up.
pub fn use_viewport(debounce_ms: u32) -> ReadSignal<Viewport> {
    let (viewport, set_viewport) = signal(current_viewport());
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let timeout = Timeout::new(debounce_ms, move || {
            let next = current_viewport();
            if viewport.try_get_untracked() != Some(next) {
                log::debug!("[Viewport] {}x{} ({})", next.width, next.height, next.breakpoint().name());
                set_viewport.try_set(next);
            }
        });
        // Replacing the previous timeout cancels it
        pending.try_set_value(Some(timeout));
    });

    if let Some(win) = web_sys::window() {
        for event in EVENTS {
            let _ = win.add_event_listener_with_callback(event, on_change.as_ref().unchecked_ref());
        }
    }

    let listener = StoredValue::new_local(Some(on_change));
    on_cleanup(move || {
        pending.try_set_value(None);
        let Some(cb) = listener.try_update_value(|l| l.take()).flatten() else {
            return;
        };
        if let Some(win) = web_sys::window() {
            for event in EVENTS {
                let _ = win.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
    });

    viewport
}
