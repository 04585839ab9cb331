//! Collection Tracker Frontend Entry Point

mod models;
mod config;
mod commands;
mod item_store;
mod filter;
mod groups;
mod modal;
mod state;
mod render;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_browser();
    if let Err(e) = console_logger::init_logger("Collection", config.log_level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    log::info!("Starting with API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
