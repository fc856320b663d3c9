//! Documentation sources.
//!
//! A [`DocsSource`] delivers raw index payloads and article HTML. The
//! production source talks HTTP; tests substitute in-memory sources.

mod http;

pub use http::HttpDocsSource;

use crate::core::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Upstream provider of index payloads and documentation pages
#[async_trait]
pub trait DocsSource: Send + Sync {
    /// Raw `index.js` bytes for a version
    async fn fetch_index(&self, version: &str) -> Result<Vec<u8>, FetchError>;

    /// Page HTML, or `None` when the page does not exist
    async fn fetch_page(&self, url: &str) -> Result<Option<String>, FetchError>;

    /// Base URL that article links are built from
    fn base_url(&self) -> &str;
}

/// Enforces a minimum delay between consecutive requests
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Mutex::new(None),
        }
    }

    /// Wait until the next request is allowed, then claim the slot
    pub async fn acquire(&self) {
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let ready_at = previous + self.min_interval;
            if ready_at > Instant::now() {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        *last = Some(Instant::now());
    }
}
