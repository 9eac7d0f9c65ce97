//! Member Card Components
//!
//! One person, drawn as a list row (mobile) or as a line inside a
//! department card (desktop), plus the contact links both share.

use leptos::prelude::*;

use crate::commands;
use crate::context::{use_app_context, AppContext};
use crate::interaction::{card_action, link_action, ContactAction, ContactKind, LinkSurface};
use crate::layout::MemberCard;

fn on_card_click(ctx: AppContext, card: &MemberCard) {
    let action = ctx.with_config(|config| card_action(card, &ctx.device, config));
    commands::perform(action, move |notice| ctx.notify(notice));
}

/// `tel:`/`mailto:` link that copies instead on wide screens
#[component]
pub fn ContactLink(
    kind: ContactKind,
    value: String,
    surface: LinkSurface,
    link_class: &'static str,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = kind.href(&value);
    let label = value.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let action = ctx.with_config(|config| link_action(kind, &value, surface, &ctx.device, config));
        if action != ContactAction::Nothing {
            ev.prevent_default();
            commands::perform(action, move |notice| ctx.notify(notice));
        }
    };

    view! {
        <a class=link_class href=href on:click=on_click>{label}</a>
    }
}

/// Photo, or a one-letter placeholder when there is none (or it fails to load)
#[component]
pub fn Avatar(
    photo_url: Option<String>,
    glyph: String,
    wrapper_class: &'static str,
) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let has_photo = photo_url.is_some();

    let class = move || {
        if has_photo && !broken.get() {
            wrapper_class.to_string()
        } else {
            format!("{} default", wrapper_class)
        }
    };

    view! {
        <div class=class>
            {move || match (&photo_url, broken.get()) {
                (Some(url), false) => view! {
                    <img
                        src=url.clone()
                        class="avatar-img"
                        alt=""
                        on:error=move |_| set_broken.set(true)
                    />
                }.into_any(),
                _ => glyph.clone().into_any(),
            }}
        </div>
    }
}

/// Row in the grouped mobile list
#[component]
pub fn MobileMemberRow(card: MemberCard) -> impl IntoView {
    let ctx = use_app_context();
    let hiring = card.hiring;
    let row_class = if hiring { "ios-list-row member-row hiring" } else { "ios-list-row member-row" };
    let cursor = if hiring { "default" } else { "pointer" };

    let MemberCard { display_name, title, team, email, phone, photo_url, avatar, .. } = card.clone();
    let phone_sep = team.is_some() && phone.is_some();
    let email_sep = (team.is_some() || phone.is_some()) && email.is_some();

    let on_click = move |_: web_sys::MouseEvent| {
        if !hiring {
            on_card_click(ctx, &card);
        }
    };

    view! {
        <div
            class=row_class
            style:cursor=cursor
            on:click=on_click
        >
            <Avatar photo_url=photo_url glyph=avatar wrapper_class="member-avatar" />
            <div class="member-info">
                <div class="info-row name-row">
                    <span class="row-name">{display_name}</span>
                    <span class="row-title">{title.map(|t| format!(" {}", t))}</span>
                </div>
                <div class="info-row contact-row">
                    {team.map(|t| view! { <span>{t}</span> })}
                    {phone_sep.then(|| view! { <span class="contact-sep">" | "</span> })}
                    {phone.map(|p| view! {
                        <ContactLink kind=ContactKind::Phone value=p surface=LinkSurface::MobileList link_class="contact-link" />
                    })}
                    {email_sep.then(|| view! { <span class="contact-sep">" | "</span> })}
                    {email.map(|e| view! {
                        <ContactLink kind=ContactKind::Email value=e surface=LinkSurface::MobileList link_class="contact-link" />
                    })}
                </div>
            </div>
            {(!hiring).then(|| view! { <div class="row-arrow">"›"</div> })}
        </div>
    }
}

/// Line inside a desktop tree card
#[component]
pub fn DesktopMemberItem(card: MemberCard) -> impl IntoView {
    let ctx = use_app_context();
    let hiring = card.hiring;
    let item_class = if hiring { "desktop-member-item hiring" } else { "desktop-member-item" };
    let cursor = if hiring { "default" } else { "pointer" };

    let MemberCard { display_name, title, team, email, phone, photo_url, avatar, .. } = card.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if !hiring {
            on_card_click(ctx, &card);
        }
    };

    view! {
        <div
            class=item_class
            style:cursor=cursor
            on:click=on_click
        >
            <Avatar photo_url=photo_url glyph=avatar wrapper_class="d-avatar-wrapper" />
            <div class="d-info">
                <div class="d-line-primary">
                    <span class="d-name">{display_name}</span>
                    {title.map(|t| view! {
                        <span class="d-sep">"|"</span>
                        <span class="d-title">{t}</span>
                    })}
                    {team.map(|t| view! {
                        <span class="d-sep">"|"</span>
                        <span class="d-dept">{t}</span>
                    })}
                </div>
                {email.map(|e| view! {
                    <div class="d-line-sub">
                        <ContactLink kind=ContactKind::Email value=e surface=LinkSurface::DesktopTree link_class="d-link" />
                    </div>
                })}
                {phone.map(|p| view! {
                    <div class="d-line-sub">
                        <ContactLink kind=ContactKind::Phone value=p surface=LinkSurface::DesktopTree link_class="d-link" />
                    </div>
                })}
            </div>
        </div>
    }
}
