//! HTTP API Client
//!
//! Fetches the analytics record list with `gloo-net`.

use analytics_portal::analytics::{AnalyticsError, TodoRecord, TodoSource};
use async_trait::async_trait;
use gloo_net::http::Request;

/// [`TodoSource`] that GETs the configured todos URL
#[derive(Debug, Clone)]
pub struct TodoClient {
    url: String,
}

impl TodoClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl TodoSource for TodoClient {
    async fn fetch_todos(&self) -> Result<Vec<TodoRecord>, AnalyticsError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| AnalyticsError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(AnalyticsError::Status(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| AnalyticsError::Decode(e.to_string()))
    }
}
