//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::commands::{self, DirectoryClient};
use crate::config::Config;
use crate::interaction::DeviceContext;
use crate::store::{self, LoadStatus, OrgStore};
use crate::sync::{self, SyncPhase};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive state
    pub store: OrgStore,
    /// Device description, decided once at startup
    pub device: DeviceContext,
    config: StoredValue<Config>,
}

impl AppContext {
    pub fn new(store: OrgStore, config: Config, device: DeviceContext) -> Self {
        Self {
            store,
            device,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> Config {
        self.config.get_value()
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&Config) -> T) -> T {
        self.config.with_value(f)
    }

    /// Show a transient message at the bottom of the page
    pub fn notify(&self, message: impl Into<String>) {
        let store = self.store;
        let serial = store::store_push_toast(&store, message.into());
        let delay = self.with_config(|c| c.toast_ms);
        Timeout::new(delay, move || store::store_clear_toast(&store, serial)).forget();
    }

    /// Load the directory into the content area (initial page load)
    pub fn load(&self) {
        let store = self.store;
        let config = self.config();
        spawn_local(async move {
            let client = DirectoryClient::new(&config);
            let status = commands::fetch_status(&client, &config).await;
            store::store_set_status(&store, status);
        });
    }

    /// Refresh upstream, wait, and reload. Ignored while a sync is running.
    pub fn sync(&self) {
        let store = self.store;
        if !sync::should_start_sync(store::store_sync_phase(&store)) {
            info!("sync already in progress");
            return;
        }
        let ctx = *self;
        let config = self.config();
        spawn_local(async move {
            let client = DirectoryClient::new(&config);
            let result = sync::run_sync(
                &client,
                &config,
                |ms| gloo_timers::future::TimeoutFuture::new(ms),
                |phase: SyncPhase| store::store_set_sync_phase(&store, phase),
            )
            .await;
            match result {
                Ok(people) => {
                    store::store_set_status(&store, LoadStatus::Ready(people));
                    ctx.notify(sync::SYNC_DONE_MESSAGE);
                }
                Err(_) => ctx.notify(sync::SYNC_FAILED_MESSAGE),
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
