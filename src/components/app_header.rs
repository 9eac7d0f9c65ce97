//! App Header Component
//!
//! Page title and the manual sync button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_sync_phase;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let busy = move || store_sync_phase(&ctx.store).is_busy();

    view! {
        <header class="app-header">
            <h1 class="app-title">"조직도"</h1>
            <button
                class="sync-btn"
                title="최신 데이터로 동기화"
                disabled=busy
                on:click=move |_| ctx.sync()
            >
                {move || if busy() { "동기화 중..." } else { "동기화" }}
            </button>
        </header>
    }
}
