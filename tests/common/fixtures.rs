// Test fixtures for integration testing

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use unidocs::core::error::FetchError;
use unidocs::core::fetch::DocsSource;

/// Base URL served by [`MemorySource`]
#[allow(dead_code)] // Used in integration tests
pub const BASE_URL: &str = "https://docs.example.test";

/// Small but complete index payload (six pages, four stop words)
#[allow(dead_code)] // Used in integration tests
pub const SAMPLE_INDEX: &str = r#"
var pages = [["GameObject"],["GameObject.SetActive"],["Transform"],["Transform-position"],["Vector3"],["Debug.Log"]];
var info = [["Base class for all entities in Unity Scenes.",0],["Activates/Deactivates the GameObject.",2],["Position, rotation and scale of an object.",0],["The world space position of the Transform.",1],["Representation of 3D vectors and points.",0],["Logs a message to the Unity Console.",2]];
var common = {"a":1,"the":1,"is":1,"of":1};
var searchIndex = {"gameobject":[0,1],"transform":[2,3],"vector3":[4],"debug":[5]};
"#;

/// Minimal ScriptReference page for Transform.position
#[allow(dead_code)] // Used in integration tests
pub const POSITION_PAGE: &str = r#"<html>
<head><title>Unity - Scripting API: Transform.position</title><script>var x = 1;</script></head>
<body>
<div class="feedback">Leave feedback</div>
<h1>Transform.position</h1>
<h2>Description</h2>
<p>The world space position of the Transform.</p>
<pre>transform.position = Vector3.zero;</pre>
</body>
</html>"#;

/// In-memory documentation source that counts index fetches
///
/// Versions without a registered payload answer `NotFound`. An optional
/// delay makes concurrent refreshes overlap.
#[derive(Default)]
#[allow(dead_code)] // Used in integration tests
pub struct MemorySource {
    indexes: Mutex<HashMap<String, Result<Vec<u8>, FetchError>>>,
    pages: Mutex<HashMap<String, String>>,
    index_fetches: AtomicUsize,
    page_fetches: AtomicUsize,
    delay: Option<Duration>,
}

#[allow(dead_code)] // Used in integration tests
impl MemorySource {
    /// Source serving [`SAMPLE_INDEX`] for every listed version
    pub fn with_sample(versions: &[&str]) -> Self {
        let source = Self::default();
        for version in versions {
            source.set_index(version, Ok(SAMPLE_INDEX.as_bytes().to_vec()));
        }
        source
    }

    /// Hold every index fetch for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_index(&self, version: &str, payload: Result<Vec<u8>, FetchError>) {
        self.indexes.lock().insert(version.to_string(), payload);
    }

    pub fn add_page(&self, url: &str, html: &str) {
        self.pages.lock().insert(url.to_string(), html.to_string());
    }

    pub fn index_fetches(&self) -> usize {
        self.index_fetches.load(Ordering::SeqCst)
    }

    pub fn page_fetches(&self) -> usize {
        self.page_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocsSource for MemorySource {
    async fn fetch_index(&self, version: &str) -> Result<Vec<u8>, FetchError> {
        self.index_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.indexes
            .lock()
            .get(version)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::NotFound(version.to_string())))
    }

    async fn fetch_page(&self, url: &str) -> Result<Option<String>, FetchError> {
        self.page_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages.lock().get(url).cloned())
    }

    fn base_url(&self) -> &str {
        BASE_URL
    }
}
