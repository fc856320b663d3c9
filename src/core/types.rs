//! Core data types for the unidocs service.
//!
//! Requests and responses exchanged between the search facade and
//! its adapters (MCP tools, CLI commands).

use crate::core::index::MemberType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an index lookup was satisfied from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheSource {
    Memory,
    Disk,
    Fresh,
}

impl fmt::Display for CacheSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CacheSource::Memory => "memory",
            CacheSource::Disk => "disk",
            CacheSource::Fresh => "fresh",
        };
        f.write_str(s)
    }
}

/// Request to search a version's index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,

    /// Documentation version (normalized)
    pub version: String,

    /// Maximum results (optional, capped by config)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// A single ranked page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,

    /// Page summary, truncated for display
    pub description: String,
    pub member_type: MemberType,
    pub score: f32,
}

/// Response from a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub version: String,
    pub results: Vec<SearchHit>,

    /// Number of results returned
    pub count: usize,
    pub source: CacheSource,

    /// Index was served past its expiration after a failed refresh
    pub stale: bool,
    pub duration_ms: u64,
}

/// Request for title completions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub partial: String,
    pub version: String,

    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response with title completions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub partial: String,
    pub version: String,
    pub suggestions: Vec<String>,

    /// Suggestions came from the built-in class list, not the index
    pub fallback: bool,
    pub stale: bool,
}

/// Request for a rendered API article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub class_name: String,

    #[serde(default)]
    pub member_name: Option<String>,
    pub version: String,

    /// Separator hint; inferred by trying both forms when absent
    #[serde(default)]
    pub member_type: Option<MemberType>,
}

/// A documentation page rendered as plain text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// One cached version, as reported by cache status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntryInfo {
    pub version: String,
    pub fetched_at: DateTime<Utc>,
    pub pages: usize,
    pub terms: usize,
    pub in_memory: bool,
    pub on_disk: bool,
    pub stale: bool,
}

/// Snapshot of both cache tiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatus {
    pub cache_dir: String,
    pub expiration_hours: u64,
    pub entries: Vec<CacheEntryInfo>,
}
