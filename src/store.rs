//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Person;
use crate::sync::SyncPhase;

/// Inline message shown when the directory cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "데이터를 불러오는 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

/// What the content area currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready(Vec<Person>),
    Failed(String),
}

impl LoadStatus {
    pub fn failed() -> Self {
        LoadStatus::Failed(LOAD_ERROR_MESSAGE.to_string())
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct OrgState {
    /// Directory snapshot (or why there is none)
    pub status: LoadStatus,
    /// Progress of a manual sync
    pub sync_phase: SyncPhase,
    /// Current toast text, if one is showing
    pub toast: Option<String>,
    /// Bumped on every toast so stale hide timers can be ignored
    pub toast_serial: u32,
}

/// Type alias for the store
pub type OrgStore = Store<OrgState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_status(store: &OrgStore) -> LoadStatus {
    store.status().get()
}

pub fn store_set_status(store: &OrgStore, status: LoadStatus) {
    store.status().set(status);
}

pub fn store_sync_phase(store: &OrgStore) -> SyncPhase {
    store.sync_phase().get()
}

pub fn store_set_sync_phase(store: &OrgStore, phase: SyncPhase) {
    store.sync_phase().set(phase);
}

pub fn store_toast(store: &OrgStore) -> Option<String> {
    store.toast().get()
}

/// Show `message` and return the serial that identifies it
pub fn store_push_toast(store: &OrgStore, message: String) -> u32 {
    let serial = store.toast_serial().get_untracked().wrapping_add(1);
    store.toast_serial().set(serial);
    store.toast().set(Some(message));
    serial
}

/// Hide the toast, unless a newer one replaced it
pub fn store_clear_toast(store: &OrgStore, serial: u32) {
    if store.toast_serial().get_untracked() == serial {
        store.toast().set(None);
    }
}
