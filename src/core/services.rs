//! Unified service container for unidocs
//!
//! Provides shared access to all core services.

use crate::core::article::ArticleService;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::fetch::{DocsSource, HttpDocsSource};
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Index facade (cache + search)
    pub search: Arc<SearchService>,

    /// API article retrieval
    pub articles: Arc<ArticleService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, fetching over HTTP
    pub fn new(config: Config) -> Result<Self> {
        let source: Arc<dyn DocsSource> = Arc::new(HttpDocsSource::new(&config.fetch)?);
        Ok(Self::with_source(config, source))
    }

    /// Create services around an explicit documentation source
    pub fn with_source(config: Config, source: Arc<dyn DocsSource>) -> Self {
        let search = Arc::new(SearchService::from_config(Arc::clone(&source), &config));
        let articles = Arc::new(ArticleService::new(source));

        Self {
            search,
            articles,
            config: Arc::new(config),
        }
    }
}
