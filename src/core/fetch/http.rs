//! HTTP documentation source backed by reqwest.

use super::{DocsSource, RateLimiter};
use crate::core::config::FetchConfig;
use crate::core::error::{DocsError, FetchError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Fetches index payloads and pages from the documentation site
pub struct HttpDocsSource {
    client: Client,
    base_url: String,
    limiter: RateLimiter,
}

impl HttpDocsSource {
    /// Create a source from fetch settings
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DocsError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::new(Duration::from_millis(config.rate_limit_ms)),
        })
    }

    /// URL of the search payload for a version
    pub fn index_url(&self, version: &str) -> String {
        format!(
            "{}/{}/Documentation/ScriptReference/docdata/index.js",
            self.base_url, version
        )
    }

    async fn get(&self, url: &str) -> std::result::Result<reqwest::Response, FetchError> {
        self.limiter.acquire().await;
        tracing::debug!("GET {}", url);

        self.client.get(url).send().await.map_err(request_error)
    }
}

/// Map a send or body-read failure
fn request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl DocsSource for HttpDocsSource {
    async fn fetch_index(&self, version: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let url = self.index_url(version);
        let response = self.get(&url).await?;

        match response.status() {
            StatusCode::OK => {
                let bytes = response.bytes().await.map_err(request_error)?;
                tracing::info!("Fetched index for version {} ({} bytes)", version, bytes.len());
                Ok(bytes.to_vec())
            }
            StatusCode::NOT_FOUND => Err(FetchError::NotFound(url)),
            status => Err(FetchError::Status(status.as_u16())),
        }
    }

    async fn fetch_page(&self, url: &str) -> std::result::Result<Option<String>, FetchError> {
        let response = self.get(url).await?;

        match response.status() {
            StatusCode::OK => response.text().await.map(Some).map_err(request_error),
            StatusCode::NOT_FOUND => Ok(None),
            status => {
                tracing::warn!("HTTP {} when fetching {}", status.as_u16(), url);
                Err(FetchError::Status(status.as_u16()))
            }
        }
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
