//! Loading Overlay Component
//!
//! Covers the page while a manual sync is running.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_sync_phase;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let store = use_app_context().store;
    let phase = move || store_sync_phase(&store);

    view! {
        <div
            id="loading-overlay"
            class=move || if phase().is_busy() { "loading-overlay" } else { "loading-overlay hidden" }
        >
            <div class="spinner"></div>
            <p class="loading-text">{move || phase().label()}</p>
        </div>
    }
}
