//! Browser Environment
//!
//! Window, navigator and location access. Everything that sniffs the
//! device happens once, in [`detect_device`].

use leptos::task::spawn_local;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;

use super::{copy_text, ApiError};
use crate::interaction::{ContactAction, DeviceContext};

/// Describe the current device from its user agent and viewport
pub fn detect_device() -> DeviceContext {
    let Some(window) = web_sys::window() else {
        return DeviceContext::default();
    };
    let agent = window.navigator().user_agent().unwrap_or_default();
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(DeviceContext::default().viewport_width);
    let device = DeviceContext::from_user_agent(&agent, width);
    debug!("device: {:?}", device);
    device
}

/// Element the app mounts into
pub fn mount_point(id: &str) -> Result<web_sys::HtmlElement, ApiError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| ApiError::MissingContainer(id.to_string()))
}

fn open_href(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        warn!("could not open {}: {:?}", href, e);
    }
}

/// Carry out a contact action; `on_copied` receives the toast text.
pub fn perform(action: ContactAction, on_copied: impl FnOnce(String) + 'static) {
    match action {
        ContactAction::Open(href) => open_href(&href),
        ContactAction::Copy { text, notice } => spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => on_copied(notice),
                Err(e) => warn!("{}", e),
            }
        }),
        ContactAction::Nothing => {}
    }
}
