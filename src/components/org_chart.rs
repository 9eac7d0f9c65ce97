//! Org Chart Content Area
//!
//! Shows the loading state, the load error, or both chart layouts.
//! The two layouts are always rendered; the stylesheet hides one.

use leptos::prelude::*;

use crate::components::{DesktopTree, MobileList};
use crate::context::use_app_context;
use crate::layout::OrgChart;
use crate::store::{store_status, LoadStatus};

#[component]
pub fn OrgChartView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="org-content">
            {move || match store_status(&store) {
                LoadStatus::Loading => view! {
                    <div class="loading-message">"조직도를 불러오는 중..."</div>
                }.into_any(),
                LoadStatus::Failed(message) => view! {
                    <div class="error-message">{message}</div>
                }.into_any(),
                LoadStatus::Ready(people) => {
                    let chart = ctx.with_config(|config| OrgChart::build(&people, config));
                    if chart.is_empty() {
                        view! { <div class="empty-message">"표시할 구성원이 없습니다."</div> }.into_any()
                    } else {
                        view! { <ChartLayouts chart=chart /> }.into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn ChartLayouts(chart: OrgChart) -> impl IntoView {
    let OrgChart { sections, tree } = chart;

    view! {
        <div class="mobile-view-container">
            <MobileList sections=sections />
        </div>
        <div class="desktop-view-container hidden-on-mobile">
            <DesktopTree root=tree />
        </div>
    }
}
