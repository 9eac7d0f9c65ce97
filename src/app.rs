//! Org Chart App
//!
//! Root component: header, chart content, toast and sync overlay.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AppHeader, LoadingOverlay, OrgChartView, Toast};
use crate::config::Config;
use crate::context::AppContext;
use crate::interaction::DeviceContext;
use crate::store::OrgState;

#[component]
pub fn App(config: Config, device: DeviceContext) -> impl IntoView {
    let store = Store::new(OrgState::default());
    let ctx = AppContext::new(store, config, device);
    provide_context(ctx);

    // Initial load, once on mount
    Effect::new(move |_| ctx.load());

    view! {
        <div class="app-layout">
            <AppHeader />
            <main class="app-main">
                <OrgChartView />
            </main>
            <Toast />
            <LoadingOverlay />
        </div>
    }
}
