//! Marketplace Frontend Entry Point

mod app;
mod components;
mod context;
mod format;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(tracing::Level::INFO) {
        leptos::logging::warn!("{}", e);
    }
    mount_to_body(App);
}
