//! HTTP search provider for the asset search endpoint
//!
//! Issues `GET {base_url}/assets/search/?q=<query>` and expects
//! `{"results": [{"symbol": ..., "name": ..., "type": ...}]}` back.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::{AssetKind, Candidate, SearchError, SearchProvider};

/// Path of the search endpoint relative to the API base URL
const SEARCH_PATH: &str = "/assets/search/";

/// Async client for the remote asset search endpoint
#[derive(Debug, Clone)]
pub struct HttpSearchProvider {
    client: Client,
    endpoint: String,
}

impl HttpSearchProvider {
    /// Create a provider for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url),
        })
    }

    /// Full URL of the search endpoint (without the query string)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH)
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Api { code, message });
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        parse_results(&body)
    }
}

impl SearchProvider for HttpSearchProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn search(&self, query: String) -> Result<Vec<Candidate>, SearchError> {
        self.fetch(&query).await
    }
}

fn map_reqwest_error(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Network(e.to_string())
    }
}

/// Parse a search response body into candidates
///
/// Entries without a symbol are dropped; an entry without a name falls back
/// to its symbol. A body that is not JSON, or has no `results` array, is
/// malformed.
pub(crate) fn parse_results(body: &str) -> Result<Vec<Candidate>, SearchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SearchError::Malformed(e.to_string()))?;

    let results = value
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchError::Malformed("missing 'results' array".to_string()))?;

    Ok(results.iter().filter_map(parse_entry).collect())
}

fn parse_entry(entry: &Value) -> Option<Candidate> {
    let symbol = entry
        .get("symbol")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(symbol);

    let kind = entry
        .get("type")
        .cloned()
        .and_then(|v| serde_json::from_value::<AssetKind>(v).ok())
        .unwrap_or_default();

    Some(Candidate::new(symbol, name, kind))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
