//! Category Bar Component
//!
//! Horizontal row of category chips for the explore feed.

use leptos::prelude::*;

use crate::store::{store_set_category, use_app_store, AppStateStoreFields};

pub const CATEGORIES: [&str; 14] = [
    "All",
    "Digital Art",
    "Photography",
    "Illustration",
    "UI Design",
    "3D Art",
    "Fashion",
    "Architecture",
    "Nature",
    "Travel",
    "Food",
    "Technology",
    "Music",
    "Sports",
];

#[component]
pub fn CategoryBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="category-bar">
            {CATEGORIES
                .iter()
                .map(|&name| {
                    let is_active = move || store.category().get() == name;
                    view! {
                        <button
                            class="category-chip"
                            class:active=is_active
                            on:click=move |_| store_set_category(&store, name)
                        >
                            {name}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
