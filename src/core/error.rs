//! Error types and error handling for the unidocs service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for unidocs operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Failure reported by a documentation source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// Failure while parsing an index payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("payload is not valid UTF-8")]
    InvalidEncoding,

    #[error("missing '{0}' block")]
    MissingBlock(&'static str),

    #[error("'{0}' block appears more than once")]
    DuplicateBlock(&'static str),

    #[error("malformed '{block}' block: {message}")]
    Malformed {
        block: &'static str,
        message: String,
    },

    #[error("term '{term}' references page {page}, but only {page_count} pages exist")]
    PageOutOfRange {
        term: String,
        page: usize,
        page_count: usize,
    },
}

/// Main error type for the unidocs service
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Failed to fetch index for version {version}: {source}")]
    Fetch {
        version: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to parse index for version {version}: {source}")]
    Parse {
        version: String,
        #[source]
        source: ParseError,
    },

    #[error("Cache I/O error: {0}")]
    CacheIo(String),

    #[error("Article not found: {url}")]
    ArticleNotFound { url: String },

    #[error("Article fetch failed: {0}")]
    ArticleFetch(#[from] FetchError),

    #[error("Unsupported version '{version}'. Supported versions: {}", supported.join(", "))]
    UnsupportedVersion {
        version: String,
        supported: Vec<String>,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocsError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocsError::ArticleNotFound { .. }
                | DocsError::Fetch {
                    source: FetchError::NotFound(_),
                    ..
                }
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocsError::InvalidQuery(_)
                | DocsError::UnsupportedVersion { .. }
                | DocsError::ConfigError(_)
        )
    }

    /// Check if the upstream source failed (network, timeout, bad payload)
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            DocsError::Fetch { .. } | DocsError::Parse { .. } | DocsError::ArticleFetch(_)
        )
    }
}
