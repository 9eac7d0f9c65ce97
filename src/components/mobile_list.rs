//! Mobile List View
//!
//! Grouped, inset list sections: the top card, then one section per department.

use leptos::prelude::*;

use crate::components::MobileMemberRow;
use crate::layout::{MobileRow, MobileSection};

#[component]
pub fn MobileList(sections: Vec<MobileSection>) -> impl IntoView {
    view! {
        <div class="org-container">
            {sections
                .into_iter()
                .map(|section| view! { <ListGroup section=section /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ListGroup(section: MobileSection) -> impl IntoView {
    let MobileSection { title, rows } = section;

    view! {
        <div class="ios-section">
            <div class="ios-section-header">{title}</div>
            <div class="ios-list">
                {rows
                    .into_iter()
                    .map(|row| match row {
                        MobileRow::Member(card) => view! { <MobileMemberRow card=card /> }.into_any(),
                        MobileRow::SubHeader(name) => {
                            view! { <div class="ios-list-row sub-header-row">{name}</div> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
