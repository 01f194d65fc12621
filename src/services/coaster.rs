//! Client for the upstream coaster API.
//!
//! Each operation is a single outbound GET with no retry: either the
//! upstream answers with a success status and the body decodes into the
//! expected entity, or the upstream's status and reason are carried back
//! verbatim. Transport and decode failures propagate to the handler
//! layer, which maps them to a generic server error.

use crate::models::{Coaster, CoasterPage};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The list endpoint always requests one fixed page.
const LIST_OFFSET: u32 = 0;
const LIST_LIMIT: u32 = 300;

/// Errors from a single upstream round-trip.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The upstream answered with a non-success status. The status and
    /// reason are relayed to the caller without reading the body.
    #[error("upstream returned {status}: {reason}")]
    Upstream { status: u16, reason: String },
    /// Network-level failure reaching the upstream.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The upstream body was not valid JSON for the expected entity.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Proxy over the upstream coaster API.
///
/// Holds the injected `reqwest::Client` (a shared connection-pool handle)
/// and the configured base URL. One instance serves all inbound requests
/// concurrently; there is no shared mutable state.
#[derive(Clone)]
pub struct CoasterProxy {
    client: Client,
    base_url: String,
}

impl CoasterProxy {
    /// Create a proxy from an HTTP client and the upstream base URL.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the fixed first page of the full coaster listing.
    pub async fn list_coasters(&self) -> Result<CoasterPage, ProxyError> {
        self.fetch(&self.list_url()).await
    }

    /// Fetch a single coaster by its numeric id.
    pub async fn coaster_by_id(&self, id: i64) -> Result<Coaster, ProxyError> {
        self.fetch(&self.by_id_url(id)).await
    }

    /// Fetch a coaster chosen by the upstream at random.
    pub async fn random_coaster(&self) -> Result<Coaster, ProxyError> {
        self.fetch(&self.random_url()).await
    }

    /// Search coasters by free-text query.
    pub async fn search_coasters(&self, query: &str) -> Result<CoasterPage, ProxyError> {
        self.fetch(&self.search_url(query)).await
    }

    fn list_url(&self) -> String {
        format!(
            "{}/api/coasters?offset={LIST_OFFSET}&limit={LIST_LIMIT}",
            self.base_url
        )
    }

    fn by_id_url(&self, id: i64) -> String {
        format!("{}/api/coasters/{id}", self.base_url)
    }

    fn random_url(&self) -> String {
        format!("{}/api/coasters/random", self.base_url)
    }

    // Double quotes are stripped before embedding; nothing else is escaped.
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/api/coasters/search?q={}",
            self.base_url,
            query.replace('"', "")
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProxyError> {
        tracing::debug!(%url, "forwarding request upstream");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "upstream returned an error status");
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_proxy(base_url: &str) -> CoasterProxy {
        CoasterProxy::new(Client::new(), base_url)
    }

    #[test]
    fn test_list_url_uses_fixed_page() {
        let proxy = test_proxy("https://api.example.com");
        assert_eq!(
            proxy.list_url(),
            "https://api.example.com/api/coasters?offset=0&limit=300"
        );
    }

    #[test]
    fn test_by_id_url_has_no_query_params() {
        let proxy = test_proxy("https://api.example.com");
        assert_eq!(proxy.by_id_url(4027), "https://api.example.com/api/coasters/4027");
    }

    #[test]
    fn test_random_url() {
        let proxy = test_proxy("https://api.example.com");
        assert_eq!(proxy.random_url(), "https://api.example.com/api/coasters/random");
    }

    #[test]
    fn test_search_url_strips_double_quotes() {
        let proxy = test_proxy("https://api.example.com");
        assert_eq!(
            proxy.search_url("he\"llo"),
            "https://api.example.com/api/coasters/search?q=hello"
        );
        assert_eq!(
            proxy.search_url("\"\"quoted\"\""),
            "https://api.example.com/api/coasters/search?q=quoted"
        );
    }

    #[test]
    fn test_search_url_leaves_other_characters_alone() {
        let proxy = test_proxy("https://api.example.com");
        assert_eq!(
            proxy.search_url("steel&wood"),
            "https://api.example.com/api/coasters/search?q=steel&wood"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let proxy = test_proxy("https://api.example.com/");
        assert_eq!(proxy.by_id_url(1), "https://api.example.com/api/coasters/1");
    }
}
