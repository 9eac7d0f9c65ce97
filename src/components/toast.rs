//! Toast Component
//!
//! Transient message at the bottom of the page. Shown and hidden
//! through `AppContext::notify`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_toast;

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div
            id="toast"
            class=move || if store_toast(&store).is_some() { "toast show" } else { "toast hidden" }
        >
            {move || store_toast(&store).unwrap_or_default()}
        </div>
    }
}
