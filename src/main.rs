//! Inspira Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod feed;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = ring_logger::init_logger("Inspira", LevelFilter::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
