//! Configuration management for the unidocs service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub versions: VersionsConfig,
}

/// Index cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Directory holding persisted indexes (one file per version)
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,

    /// Hours before a cached index is considered stale
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: u64,

    /// Serve a stale index (flagged) when its refresh fails
    #[serde(default = "default_serve_stale")]
    pub serve_stale_on_error: bool,
}

/// Upstream documentation site configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Documentation site root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Minimum delay between requests in milliseconds
    #[serde(default = "default_rate_limit_ms")]
    pub rate_limit_ms: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of search results
    #[serde(default = "default_results")]
    pub default_results: usize,

    /// Maximum search results per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Default number of name suggestions
    #[serde(default = "default_suggest_results")]
    pub suggest_results: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Documentation versions configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionsConfig {
    /// Version used when a caller does not name one
    #[serde(default = "default_version")]
    pub default: String,

    /// Versions accepted by the tools
    #[serde(default = "default_supported_versions")]
    pub supported: Vec<String>,
}

// Default value functions
fn default_cache_dir() -> PathBuf {
    PathBuf::from("./cache")
}

fn default_expiration_hours() -> u64 {
    24
}

fn default_serve_stale() -> bool {
    true
}

fn default_base_url() -> String {
    "https://docs.unity3d.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_rate_limit_ms() -> u64 {
    500
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_results() -> usize {
    20
}

fn default_max_results() -> usize {
    100
}

fn default_suggest_results() -> usize {
    10
}

fn default_max_query_length() -> usize {
    500
}

fn default_version() -> String {
    "6000.0".to_string()
}

fn default_supported_versions() -> Vec<String> {
    [
        "6000.0", "2023.3", "2023.2", "2023.1", "2022.3", "2022.2", "2022.1", "2021.3",
    ]
    .iter()
    .map(|v| v.to_string())
    .collect()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
            expiration_hours: default_expiration_hours(),
            serve_stale_on_error: default_serve_stale(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            rate_limit_ms: default_rate_limit_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_results: default_results(),
            max_results: default_max_results(),
            suggest_results: default_suggest_results(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            default: default_version(),
            supported: default_supported_versions(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. UNIDOCS_CONFIG env var
    /// 2. XDG config file (~/.config/unidocs/config.toml)
    /// 3. ./unidocs.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("UNIDOCS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("unidocs.toml").exists() {
                Self::from_file("unidocs.toml")?
            } else {
                Self::default()
            }
        };

        // Use the XDG cache directory unless a location was chosen explicitly
        if env::var("UNIDOCS_CACHE_DIR").is_err() && config.cache.dir == default_cache_dir() {
            config.cache.dir = xdg.index_cache_dir();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Cache configuration
        if let Ok(dir) = env::var("UNIDOCS_CACHE_DIR") {
            self.cache.dir = PathBuf::from(dir);
        }
        if let Ok(hours) = env::var("UNIDOCS_CACHE_EXPIRATION_HOURS") {
            if let Ok(h) = hours.parse() {
                self.cache.expiration_hours = h;
            }
        }
        if let Ok(stale) = env::var("UNIDOCS_SERVE_STALE") {
            if let Ok(s) = stale.parse() {
                self.cache.serve_stale_on_error = s;
            }
        }

        // Fetch configuration
        if let Ok(base_url) = env::var("UNIDOCS_BASE_URL") {
            self.fetch.base_url = base_url;
        }
        if let Ok(timeout) = env::var("UNIDOCS_FETCH_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.fetch.timeout_secs = t;
            }
        }
        if let Ok(delay) = env::var("UNIDOCS_RATE_LIMIT_MS") {
            if let Ok(d) = delay.parse() {
                self.fetch.rate_limit_ms = d;
            }
        }

        // Search configuration
        if let Ok(default_results) = env::var("UNIDOCS_DEFAULT_RESULTS") {
            if let Ok(n) = default_results.parse() {
                self.search.default_results = n;
            }
        }
        if let Ok(max_results) = env::var("UNIDOCS_MAX_RESULTS") {
            if let Ok(n) = max_results.parse() {
                self.search.max_results = n;
            }
        }

        // Versions configuration
        if let Ok(version) = env::var("UNIDOCS_DEFAULT_VERSION") {
            self.versions.default = version;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.cache.expiration_hours == 0 {
            return Err(DocsError::ConfigError(
                "Cache expiration must be non-zero".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(DocsError::ConfigError(
                "Fetch timeout must be non-zero".to_string(),
            ));
        }

        if self.fetch.base_url.trim().is_empty() {
            return Err(DocsError::ConfigError(
                "Base URL must not be empty".to_string(),
            ));
        }

        if self.search.default_results == 0 {
            return Err(DocsError::ConfigError(
                "Default results must be non-zero".to_string(),
            ));
        }

        if self.search.default_results > self.search.max_results {
            return Err(DocsError::ConfigError(
                "Default results cannot exceed max results".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(DocsError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.versions.supported.is_empty() {
            return Err(DocsError::ConfigError(
                "At least one supported version is required".to_string(),
            ));
        }

        if !self.versions.supported.contains(&self.versions.default) {
            return Err(DocsError::ConfigError(format!(
                "Default version '{}' is not in the supported list",
                self.versions.default
            )));
        }

        Ok(())
    }

    /// Cache expiration window as a duration
    pub fn expiration_window(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cache.expiration_hours as i64)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Cache dir: {:?}", self.cache.dir);
        tracing::info!("  Cache expiration: {}h", self.cache.expiration_hours);
        tracing::info!("  Serve stale on error: {}", self.cache.serve_stale_on_error);
        tracing::info!("  Base URL: {}", self.fetch.base_url);
        tracing::info!("  Fetch timeout: {}s", self.fetch.timeout_secs);
        tracing::info!("  Rate limit: {}ms", self.fetch.rate_limit_ms);
        tracing::info!("  Default results: {}", self.search.default_results);
        tracing::info!("  Max results: {}", self.search.max_results);
        tracing::info!("  Default version: {}", self.versions.default);
        tracing::info!(
            "  Supported versions: {} versions",
            self.versions.supported.len()
        );
    }
}
