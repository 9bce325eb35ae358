//! HTTP catalog source backed by `reqwest`.

use crate::error::{ClientError, Result};
use crate::source::CatalogSource;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use starchart_core::{ApiConfig, EntityId, EntityRecord, ResourceKind};
use std::time::Duration;

/// Build an HTTP client with the configured timeout and user agent.
///
/// # Errors
/// Returns error if the HTTP client cannot be created.
pub fn build_http_client(timeout_secs: Option<u64>, user_agent: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .timeout(Duration::from_secs(timeout_secs.unwrap_or(30)))
        .default_headers(headers);
    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent);
    }

    builder
        .build()
        .map_err(|e| ClientError::Internal(format!("failed to create HTTP client: {e}")))
}

/// Catalog source speaking to a SWAPI-style REST API.
///
/// `GET {base}/{kind}` returns a JSON array, `GET {base}/{kind}/{id}` a
/// single JSON object.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a client for `base_url` with default transport settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(base_url, build_http_client(None, None)?))
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = build_http_client(Some(config.timeout_secs), Some(&config.user_agent))?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base path without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a resource collection.
    #[must_use]
    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.as_path())
    }

    /// URL of a single record.
    #[must_use]
    pub fn item_url(&self, kind: ResourceKind, id: &EntityId) -> String {
        format!("{}/{}/{}", self.base_url, kind.as_path(), id.as_str())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            ClientError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} returned {}", url, status);
            return Err(ClientError::Remote {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Malformed body from {}: {}", url, e);
            ClientError::Parse {
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Vec<EntityRecord>> {
        let records: Vec<EntityRecord> = self.get_json(&self.collection_url(kind)).await?;
        tracing::debug!("Fetched {} {} records", records.len(), kind);
        Ok(records)
    }

    async fn fetch_one(&self, kind: ResourceKind, id: &EntityId) -> Result<EntityRecord> {
        self.get_json(&self.item_url(kind, id)).await
    }

    fn source_id(&self) -> &str {
        &self.base_url
    }
}
