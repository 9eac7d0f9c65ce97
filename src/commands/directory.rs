//! Directory API
//!
//! Reads people from the spreadsheet-backed directory endpoint and asks it
//! to refresh. Every read carries a `t=<millis>` parameter so intermediate
//! caches never serve a stale sheet.

use futures::future::try_join;
use reqwest::Client;
use tracing::{debug, error, info};

use super::ApiError;
use crate::config::Config;
use crate::models::{DirectoryPayload, Person};
use crate::store::LoadStatus;

/// Anything that can serve directory records
#[allow(async_fn_in_trait)]
pub trait DirectorySource {
    /// Read one tab (or the default listing when `tab` is `None`)
    async fn fetch_tab(&self, tab: Option<&str>) -> Result<Vec<Person>, ApiError>;

    /// Ask the upstream to rebuild its data; the response body is ignored
    async fn request_refresh(&self) -> Result<(), ApiError>;
}

/// Client for the hosted directory script.
/// Clone is cheap - reqwest::Client uses Arc internally.
#[derive(Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    async fn get(&self, query: &[(&'static str, String)]) -> Result<String, ApiError> {
        debug!("GET {} {:?}", self.base_url, query);
        let response = self.client.get(&self.base_url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_status(status, &body));
        }
        Ok(body)
    }
}

impl DirectorySource for DirectoryClient {
    async fn fetch_tab(&self, tab: Option<&str>) -> Result<Vec<Person>, ApiError> {
        let body = self.get(&read_query(tab, cache_bust())).await?;
        decode_people(&body)
    }

    async fn request_refresh(&self) -> Result<(), ApiError> {
        self.get(&refresh_query(cache_bust())).await.map(|_| ())
    }
}

fn cache_bust() -> u64 {
    js_sys::Date::now() as u64
}

/// Query for a read: `?tab=<tab>&t=<stamp>`
pub fn read_query(tab: Option<&str>, stamp: u64) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(2);
    if let Some(tab) = tab {
        query.push(("tab", tab.to_string()));
    }
    query.push(("t", stamp.to_string()));
    query
}

/// Query for a refresh: `?action=refresh&t=<stamp>`
pub fn refresh_query(stamp: u64) -> Vec<(&'static str, String)> {
    vec![("action", "refresh".to_string()), ("t", stamp.to_string())]
}

pub fn decode_people(body: &str) -> Result<Vec<Person>, ApiError> {
    let payload: DirectoryPayload = serde_json::from_str(body)?;
    Ok(payload.into_people())
}

/// Read every configured tab. With a hiring tab, both reads run together and
/// both must succeed; records from the hiring tab are marked as openings.
pub async fn load_people<S: DirectorySource>(source: &S, config: &Config) -> Result<Vec<Person>, ApiError> {
    let employees = source.fetch_tab(config.employees_tab.as_deref());
    match config.hiring_tab.as_deref() {
        None => employees.await,
        Some(tab) => {
            let (mut people, openings) = try_join(employees, source.fetch_tab(Some(tab))).await?;
            people.extend(openings.into_iter().map(|mut opening| {
                opening.is_hiring = true;
                opening
            }));
            Ok(people)
        }
    }
}

/// Load the directory and turn the outcome into what the content area shows.
pub async fn fetch_status<S: DirectorySource>(source: &S, config: &Config) -> LoadStatus {
    match load_people(source, config).await {
        Ok(people) => {
            info!("loaded {} directory records", people.len());
            LoadStatus::Ready(people)
        }
        Err(err) => {
            error!("failed to load directory: {}", err);
            LoadStatus::failed()
        }
    }
}
