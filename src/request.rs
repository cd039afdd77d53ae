use anyhow::{bail, Result};
use leptos::{create_memo, create_resource, Resource, Serializable, Signal, SignalGet};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::API_URL;
use crate::types::WeekdayFilter;

pub const RECORD_PATH: &str = "/api/v1/record";
pub const HISTORY_PATH: &str = "/api/v1/history";
pub const LIVE_PATH: &str = "/api/v1/live";
pub const WHEN_PATH: &str = "/api/v1/when";

pub fn endpoint_url(path: &str, filter: WeekdayFilter) -> String {
    match filter.query_value() {
        Some(weekday) => format!("{API_URL}{path}?weekday={weekday}"),
        None => format!("{API_URL}{path}"),
    }
}

/// Every request the weekday filter re-issues when its selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredUrls {
    pub record: String,
    pub history: String,
    pub when: String,
}

pub fn filtered_urls(filter: WeekdayFilter) -> FilteredUrls {
    FilteredUrls {
        record: endpoint_url(RECORD_PATH, filter),
        history: endpoint_url(HISTORY_PATH, filter),
        when: endpoint_url(WHEN_PATH, filter),
    }
}

/// Fetches `T` whenever the url changes. Failures are logged and resolve to `None`.
pub fn create_request<T>(url: impl Fn() -> String + 'static) -> Resource<String, Option<T>>
where
    T: DeserializeOwned + 'static,
    Option<T>: Serializable,
{
    create_resource(url, move |url| async move {
        match perform_request(&url).await {
            Ok(value) => Some(value),
            Err(err) => {
                error!(url, "request error: {err}");
                None
            }
        }
    })
}

/// Last successfully fetched value of `resource`, kept across failed refetches.
pub fn latest<T>(resource: Resource<String, Option<T>>) -> Signal<Option<T>>
where
    T: Clone + PartialEq + 'static,
{
    create_memo(move |previous: Option<&Option<T>>| {
        keep_latest(resource.get().flatten(), previous.cloned().flatten())
    })
    .into()
}

/// A fresh value replaces the shown one; a failed fetch (`None`) keeps it.
pub fn keep_latest<T>(next: Option<T>, previous: Option<T>) -> Option<T> {
    next.or(previous)
}

fn ensure_ok(status: StatusCode) -> Result<()> {
    if status != StatusCode::OK {
        bail!("unexpected status: {status}");
    }
    Ok(())
}

async fn perform_request<R: DeserializeOwned>(url: &str) -> Result<R> {
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;

    ensure_ok(response.status())?;

    let json = response.text().await?;

    debug!("json={json}");

    Ok(serde_json::from_str(&json)?)
}
