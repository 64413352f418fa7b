//! IntersectionObserver Glue
//!
//! Owns one browser `IntersectionObserver` and its callback closure. Entries
//! are reduced to an in-view flag using the configured threshold.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::ObserverOptions;
use crate::error::ObserverError;

/// One reduced intersection entry
#[derive(Debug, Clone)]
pub struct Intersection {
    pub target: Element,
    pub in_view: bool,
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
    connected: bool,
}

impl ViewportObserver {
    /// Whether the host exposes `window.IntersectionObserver`
    pub fn is_supported() -> bool {
        web_sys::window()
            .map(|win| Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false)
    }

    pub fn new<F>(options: &ObserverOptions, mut on_entry: F) -> Result<Self, ObserverError>
    where
        F: FnMut(Intersection) + 'static,
    {
        if !Self::is_supported() {
            return Err(ObserverError::Unsupported);
        }

        let opts = options.clone();
        let callback = EntriesCallback::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let in_view = opts.in_view(entry.is_intersecting(), entry.intersection_ratio());
                on_entry(Intersection {
                    target: entry.target(),
                    in_view,
                });
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| ObserverError::Js(format!("{:?}", e)))?;

        Ok(Self {
            observer,
            _callback: callback,
            connected: true,
        })
    }

    pub fn observe(&self, target: &Element) {
        if self.connected {
            self.observer.observe(target);
        }
    }

    pub fn unobserve(&self, target: &Element) {
        if self.connected {
            self.observer.unobserve(target);
        }
    }

    /// Release all observation. Idempotent.
    pub fn disconnect(&mut self) {
        if self.connected {
            self.observer.disconnect();
            self.connected = false;
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
