//! Search facade: acquires indexes through the cache and ranks pages.

use super::engine;
use crate::core::cache::{CacheManager, CachedIndex, DiskStore};
use crate::core::config::{Config, SearchConfig, VersionsConfig};
use crate::core::error::{DocsError, Result};
use crate::core::fetch::DocsSource;
use crate::core::index::{parse_index, DocIndex, Page};
use crate::core::types::{
    CacheStatus, SearchHit, SearchRequest, SearchResponse, SuggestRequest, SuggestResponse,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Longest description carried in a search hit
pub const DESCRIPTION_LIMIT: usize = 200;

/// Suggestions offered when no index can be obtained
pub const COMMON_CLASSES: [&str; 39] = [
    "GameObject", "Transform", "Component", "MonoBehaviour", "Rigidbody", "Collider", "Camera",
    "Light", "AudioSource", "Renderer", "Material", "Texture", "Mesh", "Animation", "Animator",
    "Canvas", "RectTransform", "Button", "Text", "Image", "Slider", "ScrollRect", "Input", "Time",
    "Physics", "Mathf", "Vector3", "Vector2", "Quaternion", "Color", "Debug", "Application",
    "Scene", "SceneManager", "Resources", "PlayerPrefs", "Coroutine", "WaitForSeconds", "Random",
];

/// Index facade used by every adapter
pub struct SearchService {
    source: Arc<dyn DocsSource>,
    cache: CacheManager,
    limits: SearchConfig,
    versions: VersionsConfig,
}

impl SearchService {
    pub fn new(
        source: Arc<dyn DocsSource>,
        cache: CacheManager,
        limits: SearchConfig,
        versions: VersionsConfig,
    ) -> Self {
        Self {
            source,
            cache,
            limits,
            versions,
        }
    }

    /// Build the facade and its cache from configuration
    pub fn from_config(source: Arc<dyn DocsSource>, config: &Config) -> Self {
        let cache = CacheManager::new(
            DiskStore::new(config.cache.dir.clone()),
            config.expiration_window(),
            config.cache.serve_stale_on_error,
        );
        Self::new(
            source,
            cache,
            config.search.clone(),
            config.versions.clone(),
        )
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Obtain the index for a version, refreshing through the source if needed
    pub async fn index(&self, version: &str, force_refresh: bool) -> Result<CachedIndex> {
        self.check_version(version)?;
        self.cache
            .get_or_refresh(version, force_refresh, || self.load_fresh(version))
            .await
    }

    /// Rank pages of a version's index against a query
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        if request.query.chars().count() > self.limits.max_query_length {
            return Err(DocsError::InvalidQuery(format!(
                "Query exceeds {} characters",
                self.limits.max_query_length
            )));
        }

        let limit = request
            .limit
            .unwrap_or(self.limits.default_results)
            .min(self.limits.max_results);

        let cached = self.index(&request.version, false).await?;
        let results: Vec<SearchHit> = engine::search(&cached.index, &request.query, limit)
            .into_iter()
            .map(|scored| self.hit(&request.version, scored.page, scored.score))
            .collect();

        tracing::debug!(
            "Search '{}' on {} returned {} results",
            request.query,
            request.version,
            results.len()
        );

        Ok(SearchResponse {
            query: request.query,
            version: request.version,
            count: results.len(),
            results,
            source: cached.source,
            stale: cached.stale,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Complete a partial page title
    ///
    /// Falls back to a built-in list of common classes when the index
    /// cannot be obtained.
    pub async fn suggest(&self, request: SuggestRequest) -> Result<SuggestResponse> {
        self.check_version(&request.version)?;
        let limit = request
            .limit
            .unwrap_or(self.limits.suggest_results)
            .min(self.limits.max_results);

        match self.index(&request.version, false).await {
            Ok(cached) => {
                let suggestions = engine::suggest(&cached.index, &request.partial, limit)
                    .into_iter()
                    .map(|page| page.display_name().to_string())
                    .collect();
                Ok(SuggestResponse {
                    partial: request.partial,
                    version: request.version,
                    suggestions,
                    fallback: false,
                    stale: cached.stale,
                })
            }
            Err(e) => {
                tracing::warn!("Index unavailable, using common class list: {}", e);
                Ok(SuggestResponse {
                    suggestions: fallback_suggestions(&request.partial, limit),
                    partial: request.partial,
                    version: request.version,
                    fallback: true,
                    stale: false,
                })
            }
        }
    }

    /// Drop cached indexes for one version or all versions
    pub fn invalidate(&self, version: Option<&str>) -> Result<usize> {
        self.cache.invalidate(version)
    }

    pub fn cache_status(&self) -> Result<CacheStatus> {
        self.cache.status()
    }

    pub fn supported_versions(&self) -> &[String] {
        &self.versions.supported
    }

    pub fn default_version(&self) -> &str {
        &self.versions.default
    }

    fn check_version(&self, version: &str) -> Result<()> {
        if self.versions.supported.iter().any(|v| v == version) {
            Ok(())
        } else {
            Err(DocsError::UnsupportedVersion {
                version: version.to_string(),
                supported: self.versions.supported.clone(),
            })
        }
    }

    async fn load_fresh(&self, version: &str) -> Result<DocIndex> {
        let raw = self
            .source
            .fetch_index(version)
            .await
            .map_err(|source| {
                tracing::error!("Failed to fetch index for version {}: {}", version, source);
                DocsError::Fetch {
                    version: version.to_string(),
                    source,
                }
            })?;

        let index = parse_index(&raw).map_err(|source| DocsError::Parse {
            version: version.to_string(),
            source,
        })?;

        tracing::info!(
            "Parsed index for version {}: {} pages, {} terms",
            version,
            index.page_count(),
            index.term_count()
        );

        Ok(index.with_provenance(version, Utc::now()))
    }

    fn hit(&self, version: &str, page: &Page, score: f32) -> SearchHit {
        SearchHit {
            title: page.display_name().to_string(),
            url: format!(
                "{}/{}/Documentation/ScriptReference/{}.html",
                self.source.base_url(),
                version,
                page.title
            ),
            description: truncate_description(&page.description),
            member_type: page.effective_member_type(),
            score,
        }
    }
}

/// Cut a description to [`DESCRIPTION_LIMIT`] characters, marking the cut
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let cut: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}

/// Common class names containing `partial`, alphabetically
pub fn fallback_suggestions(partial: &str, limit: usize) -> Vec<String> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<String> = COMMON_CLASSES
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .map(|c| c.to_string())
        .collect();
    matches.sort();
    matches.truncate(limit);
    matches
}
