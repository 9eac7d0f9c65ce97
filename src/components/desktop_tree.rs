//! Desktop Tree View
//!
//! Nested `<ul><li>` cards drawn as a connector diagram by the stylesheet.

use leptos::prelude::*;

use crate::components::DesktopMemberItem;
use crate::layout::{DesktopNode, MemberCard};

#[component]
pub fn DesktopTree(root: DesktopNode) -> impl IntoView {
    view! {
        <div class="desktop-tree-wrapper">
            <div class="tf-tree tf-gap-sm">
                <ul>{branch(root)}</ul>
            </div>
        </div>
    }
}

/// A card and, below it, its sub-units (recursive)
fn branch(node: DesktopNode) -> AnyView {
    let DesktopNode { title, members, children } = node;
    let has_children = !children.is_empty();

    view! {
        <li>
            <DesktopCard title=title members=members />
            {has_children.then(|| view! {
                <ul>{children.into_iter().map(branch).collect::<Vec<_>>()}</ul>
            })}
        </li>
    }
    .into_any()
}

#[component]
fn DesktopCard(title: String, members: Vec<MemberCard>) -> impl IntoView {
    let has_members = !members.is_empty();

    view! {
        <div class="tf-nc">
            <div class="desktop-node-title">{title}</div>
            {has_members.then(|| view! {
                <div class="desktop-member-list">
                    {members
                        .into_iter()
                        .map(|card| view! { <DesktopMemberItem card=card /> })
                        .collect::<Vec<_>>()}
                </div>
            })}
        </div>
    }
}
