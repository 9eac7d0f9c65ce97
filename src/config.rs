//! App Configuration
//!
//! Everything the page needs to know about its upstream and its layout
//! thresholds. The hosting page may override any field by defining
//! `window.ORG_CHART_CONFIG` before the wasm bundle loads:
//!
//! ```html
//! <script>
//!   window.ORG_CHART_CONFIG = { baseUrl: "https://…/exec", hiringTab: "hiring" };
//! </script>
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Directory endpoint used when neither the page nor the build supplies one
const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbxahRL-rkoLdTcfig8HCrJIm8mOZ2SinG6D8Iqi9gQgzITWvUuLo88lpkcOvtWY0ryU/exec";

/// Name of the global the page may define
pub const CONFIG_GLOBAL: &str = "ORG_CHART_CONFIG";

/// Which record field shapes the hierarchy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HierarchyMode {
    /// Slash-delimited `orgUnitPath`
    #[default]
    OrgUnitPath,
    /// `managerEmail` pointing at another record's `email`
    ManagerEmail,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub base_url: String,
    /// `tab` parameter for the employee list; omitted when `None`
    pub employees_tab: Option<String>,
    /// `tab` parameter for open positions; fetched alongside employees when set
    pub hiring_tab: Option<String>,
    pub hierarchy: HierarchyMode,
    /// Pause between the refresh request and the re-read
    pub sync_settle_ms: u32,
    pub toast_ms: u32,
    /// Viewports at or below this width count as handheld
    pub handheld_max_width: f64,
    /// Contact links copy instead of navigating at or above this width
    pub copy_min_width: f64,
    /// Departments shown first, in this order
    pub department_order: Vec<String>,
    /// Lowercase name fragments marking service accounts
    pub system_account_markers: Vec<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: option_env!("ORG_CHART_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            employees_tab: None,
            hiring_tab: None,
            hierarchy: HierarchyMode::default(),
            sync_settle_ms: 2000,
            toast_ms: 2000,
            handheld_max_width: 768.0,
            copy_min_width: 1200.0,
            department_order: ["Administration", "R&D", "Strategic Planning"]
                .into_iter()
                .map(String::from)
                .collect(),
            system_account_markers: ["admin", "modigence", "vision"]
                .into_iter()
                .map(String::from)
                .collect(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Config>(json).map(Config::normalized)
    }

    /// Read `window.ORG_CHART_CONFIG`; defaults when the page defines none.
    pub fn load() -> Result<Self, serde_wasm_bindgen::Error> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value::<Config>(raw).map(Config::normalized)
    }

    /// Blank strings from the page are treated as absent.
    fn normalized(mut self) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = Self::default().base_url;
        }
        self.employees_tab = self.employees_tab.filter(|t| !t.trim().is_empty());
        self.hiring_tab = self.hiring_tab.filter(|t| !t.trim().is_empty());
        self.system_account_markers = self
            .system_account_markers
            .into_iter()
            .map(|m| m.to_lowercase())
            .collect();
        self
    }

    pub fn max_log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
