//! Pin Card Component
//!
//! Image, title and author for one pin, with local like/save toggles.

use leptos::prelude::*;

use crate::models::Pin;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[component]
pub fn PinCard(pin: Pin) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let (liked, set_liked) = signal(false);
    let (saved, set_saved) = signal(false);

    let title = pin.title.clone().unwrap_or_else(|| "Untitled".to_string());
    let alt = title.clone();
    let image = pin.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let user = pin.user.clone().unwrap_or_default();
    let avatar = format!("https://i.pravatar.cc/150?u={}", user);
    // Reserve the estimated box so columns do not jump while images load
    let ratio_style = pin
        .aspect_ratio
        .map(|r| format!("aspect-ratio: 1 / {}", r))
        .unwrap_or_default();

    view! {
        <article class="pin-card">
            <div class="pin-image" style=ratio_style>
                <div class="pin-skeleton" class:hidden=move || loaded.get() aria-hidden="true" />
                <img
                    src=image
                    alt=alt
                    loading="lazy"
                    class:loaded=move || loaded.get()
                    on:load=move |_| set_loaded.set(true)
                    on:error=move |_| set_loaded.set(true)
                />
                <div class="pin-actions">
                    <button
                        class="pin-action"
                        class:active=move || saved.get()
                        aria-label=move || if saved.get() { "Unsave" } else { "Save" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_saved.update(|s| *s = !*s);
                        }
                    >
                        {move || if saved.get() { "Saved" } else { "Save" }}
                    </button>
                    <button
                        class="pin-action"
                        class:active=move || liked.get()
                        aria-label=move || if liked.get() { "Unlike" } else { "Like" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_liked.update(|l| *l = !*l);
                        }
                    >
                        {move || if liked.get() { "♥" } else { "♡" }}
                    </button>
                </div>
            </div>
            <div class="pin-meta">
                <h3 class="pin-title">{title}</h3>
                <div class="pin-author">
                    <img class="pin-avatar" src=avatar alt="" />
                    <span>{user}</span>
                    <span class="pin-likes">{move || pin.likes + if liked.get() { 1 } else { 0 }}</span>
                </div>
            </div>
        </article>
    }
}
