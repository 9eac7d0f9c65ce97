//! Org Chart Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod interaction;
mod layout;
mod logging;
mod models;
mod sort;
mod store;
mod sync;
mod tree;

use app::App;
use config::Config;
use leptos::prelude::*;
use tracing::{error, info, warn};

const MOUNT_ID: &str = "org-root";

fn main() {
    console_error_panic_hook::set_once();

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init_logging(&config);
    if let Err(err) = &loaded {
        warn!("ignoring page config: {}", err);
    }

    let device = commands::detect_device();
    info!("starting org chart (handheld: {})", device.is_handheld(&config));

    match commands::mount_point(MOUNT_ID) {
        Ok(root) => {
            leptos::mount::mount_to(root, move || view! { <App config=config device=device /> }).forget();
        }
        Err(err) => {
            error!("{}", err);
            mount_to_body(|| view! {
                <div class="error-message">{store::LOAD_ERROR_MESSAGE}</div>
            });
        }
    }
}
