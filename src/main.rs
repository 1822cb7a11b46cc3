//! Model Catalog Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod markdown;
mod storage;
mod store;

use app::App;
use catalog_core::ClientConfig;
use context::Services;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("Model catalog starting against {}", config.api_base_url);

    match Services::connect(config) {
        Ok(services) => mount_to_body(move || view! { <App services=services /> }),
        Err(e) => {
            log::error!("Could not start: {e}");
            let message = e.to_string();
            mount_to_body(move || view! { <p class="fatal">{message}</p> })
        }
    }
}
