#![allow(warnings)]
//! Awesome Todo Frontend Entry Point

mod models;
mod store;
mod config;
mod logging;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = logging::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("[App] logger init failed: {}", e).into());
    }

    let config = AppConfig::from_location();
    log::set_max_level(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
