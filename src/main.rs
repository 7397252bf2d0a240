//! Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod models;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&format!("[INIT] Base path: {}", config::base_path()).into());
    web_sys::console::log_1(&format!("[INIT] API base: {}", config::api_base()).into());

    mount_to_body(App);
}
